use serde::{Deserialize, Serialize};

use crate::entry::{Entry, Flight, Lift};

/// Where the meet currently is: which flight is on the platform and which
/// lift it is taking, plus optional manual overrides from the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiftingState {
    pub day: u32,
    pub platform: u32,
    pub flight: Flight,
    pub lift: Lift,
    /// Forces the active attempt number (one-indexed).
    pub override_attempt: Option<usize>,
    /// Forces the current lifter.
    pub override_entry_id: Option<u32>,
}

impl Default for LiftingState {
    fn default() -> Self {
        Self {
            day: 1,
            platform: 1,
            flight: Flight::A,
            lift: Lift::S,
            override_attempt: None,
            override_entry_id: None,
        }
    }
}

impl LiftingState {
    pub fn new(day: u32, platform: u32, flight: Flight, lift: Lift) -> Self {
        Self {
            day,
            platform,
            flight,
            lift,
            ..Default::default()
        }
    }

    pub fn contains(&self, entry: &Entry) -> bool {
        entry.day == self.day && entry.platform == self.platform && entry.flight == self.flight
    }
}

/// Entries lifting in the state's day, platform and flight, in input order.
pub fn entries_in_flight<'a>(entries: &'a [Entry], state: &LiftingState) -> Vec<&'a Entry> {
    entries.iter().filter(|e| state.contains(e)).collect()
}
