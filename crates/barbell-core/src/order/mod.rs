//! Lifting order.
//!
//! Given the entries of one flight and the meet's lifting state, determines
//! the active attempt, the order lifters appear in, and who is up now and next.
//!
//! - `LiftingState` - the meet cursor snapshot, with manual overrides
//! - `LiftingOrder` - the resolved order for one flight
//! - `compare_by_attempt` - the weight-based tie-break chain, shared with placement

mod resolver;
mod state;

pub use resolver::*;
pub use state::*;

pub(crate) use resolver::compare_attempts;
