pub mod barload;
pub mod config;
pub mod entry;
pub mod error;
pub mod export;
pub mod order;
pub mod place;
pub mod points;
pub mod records;
pub mod units;

pub use barload::{LoadedPlate, Plate, PlateColor, make_relative, select_plates};
pub use config::{Meet, MeetConfig};
pub use entry::{Entry, Equipment, Event, Flight, Lift, LiftStatus, ResultsMode, Sex};
pub use error::{Error, Result};
pub use order::{LiftingOrder, LiftingState, resolve};
pub use place::{
    Category, CategoryResults, EquipmentMergePolicy, Place, TeamResults, place_all,
    rank_by_points, team_results,
};
pub use points::{AgeCoefficients, Formula, Scorer};
pub use records::{LiftingRecord, RecordBook, RecordLift};
pub use units::WeightUnit;
