//! Lifting records: the record book, record-attempt checks and confirmation.
//!
//! - `RecordLift`, `RecordType` - what a record is for
//! - `RecordKey` - (division, sex, class, equipment, record type, lift)
//! - `LiftingRecord`, `RecordBook` - imported and newly set records
//! - `is_record_attempt`, `is_official_record_attempt` - checks while lifting
//! - `confirm_records`, `updated_records` - folding finished lifts into the book

mod book;
mod check;

pub use book::*;
pub use check::*;
