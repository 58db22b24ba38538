//! Competition entry types and derived per-entry quantities.
//!
//! This module contains types for representing a lifter's registration:
//! - `Sex`, `Equipment`, `Event`, `Lift`, `Flight`, `LiftStatus` - closed categories
//! - `Entry` - one competitor's full record, including attempt arrays
//! - `ResultsMode` - projected vs. final totals
//! - `WeightClass`, `WeightClassConfig` - bodyweight class assignment

mod age;
mod enums;
mod record;
mod totals;
mod weight_class;

pub use enums::*;
pub use record::*;
pub use totals::*;
pub use weight_class::*;
