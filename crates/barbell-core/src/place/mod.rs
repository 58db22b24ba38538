//! Placement within categories, points rankings and team results.
//!
//! - `Category`, `CategoryResults`, `Place` - division placing (`place_all`)
//! - `EquipmentMergePolicy` - which equipment categories compete together
//! - `PointsCategory`, `PointsCategoryResults` - formula rankings (`rank_by_points`)
//! - `TeamResults` - 3/2/1 team scoring (`team_results`)
//! - `random_lot_numbers` - flight-sequenced lot draws

mod category;
mod division;
mod lots;
mod points;
mod team;

pub use category::*;
pub use division::*;
pub use lots::*;
pub use points::*;
pub use team::*;
