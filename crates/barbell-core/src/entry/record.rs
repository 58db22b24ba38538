use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::attempts::MAX_ATTEMPTS;
use crate::entry::{Equipment, Event, Flight, Lift, LiftStatus, Sex};
use crate::error::{Error, Result};

/// Weights for one lift, one slot per attempt. Zero means "not registered".
pub type AttemptWeights = [f64; MAX_ATTEMPTS];

/// Outcomes for one lift, moving in lock-step with [`AttemptWeights`].
pub type AttemptStatuses = [LiftStatus; MAX_ATTEMPTS];

/// One competitor's full competition record.
///
/// Weights are always stored in kilograms. Attempt numbers used by the
/// accessors are one-indexed; out-of-range attempts read as unregistered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entry {
    pub id: u32,
    pub day: u32,
    pub platform: u32,
    pub flight: Flight,
    pub name: String,
    pub sex: Sex,
    pub birth_date: Option<NaiveDate>,
    /// Age override in years; 0 means "infer from birth date".
    pub age: u32,
    pub intended_weight_class_kg: String,
    pub equipment: Equipment,
    pub divisions: Vec<String>,
    pub events: Vec<Event>,
    /// Lot number for breaking ties in lifting order; 0 means "unassigned".
    pub lot: u32,
    pub team: String,
    /// Guests lift with everyone else but never place above a non-guest.
    pub guest: bool,
    /// Whether the entry may set records.
    pub can_break_records: bool,
    pub bodyweight_kg: f64,
    pub squat_kg: AttemptWeights,
    pub bench_kg: AttemptWeights,
    pub deadlift_kg: AttemptWeights,
    pub squat_status: AttemptStatuses,
    pub bench_status: AttemptStatuses,
    pub deadlift_status: AttemptStatuses,
}

impl Default for Entry {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Entry {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            day: 1,
            platform: 1,
            flight: Flight::A,
            name: String::new(),
            sex: Sex::M,
            birth_date: None,
            age: 0,
            intended_weight_class_kg: String::new(),
            equipment: Equipment::Sleeves,
            divisions: Vec::new(),
            events: Vec::new(),
            lot: 0,
            team: String::new(),
            guest: false,
            can_break_records: true,
            bodyweight_kg: 0.0,
            squat_kg: [0.0; MAX_ATTEMPTS],
            bench_kg: [0.0; MAX_ATTEMPTS],
            deadlift_kg: [0.0; MAX_ATTEMPTS],
            squat_status: [LiftStatus::NotAttempted; MAX_ATTEMPTS],
            bench_status: [LiftStatus::NotAttempted; MAX_ATTEMPTS],
            deadlift_status: [LiftStatus::NotAttempted; MAX_ATTEMPTS],
        }
    }

    pub fn weights(&self, lift: Lift) -> &AttemptWeights {
        match lift {
            Lift::S => &self.squat_kg,
            Lift::B => &self.bench_kg,
            Lift::D => &self.deadlift_kg,
        }
    }

    pub fn statuses(&self, lift: Lift) -> &AttemptStatuses {
        match lift {
            Lift::S => &self.squat_status,
            Lift::B => &self.bench_status,
            Lift::D => &self.deadlift_status,
        }
    }

    pub fn weights_mut(&mut self, lift: Lift) -> &mut AttemptWeights {
        match lift {
            Lift::S => &mut self.squat_kg,
            Lift::B => &mut self.bench_kg,
            Lift::D => &mut self.deadlift_kg,
        }
    }

    pub fn statuses_mut(&mut self, lift: Lift) -> &mut AttemptStatuses {
        match lift {
            Lift::S => &mut self.squat_status,
            Lift::B => &mut self.bench_status,
            Lift::D => &mut self.deadlift_status,
        }
    }

    /// Declared weight for a one-indexed attempt.
    pub fn weight(&self, lift: Lift, attempt: usize) -> f64 {
        attempt
            .checked_sub(1)
            .and_then(|i| self.weights(lift).get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Status for a one-indexed attempt.
    pub fn status(&self, lift: Lift, attempt: usize) -> LiftStatus {
        attempt
            .checked_sub(1)
            .and_then(|i| self.statuses(lift).get(i))
            .copied()
            .unwrap_or(LiftStatus::NotAttempted)
    }

    /// Whether the attempt is registered but not yet taken.
    pub fn is_pending(&self, lift: Lift, attempt: usize) -> bool {
        self.weight(lift, attempt) != 0.0 && self.status(lift, attempt) == LiftStatus::NotAttempted
    }

    /// Whether the entry has taken any attempt on any lift.
    pub fn has_lifted(&self) -> bool {
        self.squat_status[0].is_taken()
            || self.bench_status[0].is_taken()
            || self.deadlift_status[0].is_taken()
    }

    /// Record an attempt declaration and its outcome.
    pub fn set_attempt(&mut self, lift: Lift, attempt: usize, weight_kg: f64, status: LiftStatus) {
        if let Some(i) = attempt.checked_sub(1).filter(|&i| i < MAX_ATTEMPTS) {
            self.weights_mut(lift)[i] = weight_kg;
            self.statuses_mut(lift)[i] = status;
        }
    }

    /// Check the numeric invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if !self.bodyweight_kg.is_finite() || self.bodyweight_kg < 0.0 {
            return Err(Error::InvalidEntry {
                id: self.id,
                message: format!("bodyweight must be non-negative, got {}", self.bodyweight_kg),
            });
        }

        for lift in [Lift::S, Lift::B, Lift::D] {
            if let Some(bad) = self
                .weights(lift)
                .iter()
                .find(|w| !w.is_finite() || **w < 0.0)
            {
                return Err(Error::InvalidEntry {
                    id: self.id,
                    message: format!("{} attempt weight {} is invalid", lift.expand_name(), bad),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_accessors_are_one_indexed() {
        let mut entry = Entry::new(1);
        entry.set_attempt(Lift::B, 2, 100.0, LiftStatus::Successful);

        assert_eq!(entry.weight(Lift::B, 2), 100.0);
        assert_eq!(entry.status(Lift::B, 2), LiftStatus::Successful);
        assert_eq!(entry.weight(Lift::B, 1), 0.0);
        assert_eq!(entry.weight(Lift::B, 0), 0.0);
        assert_eq!(entry.weight(Lift::B, 6), 0.0);
    }

    #[test]
    fn test_is_pending() {
        let mut entry = Entry::new(1);
        entry.set_attempt(Lift::S, 1, 150.0, LiftStatus::NotAttempted);
        entry.set_attempt(Lift::S, 2, 0.0, LiftStatus::NotAttempted);

        assert!(entry.is_pending(Lift::S, 1));
        // Zero weight means the attempt isn't registered, regardless of status.
        assert!(!entry.is_pending(Lift::S, 2));
    }

    #[test]
    fn test_has_lifted() {
        let mut entry = Entry::new(1);
        assert!(!entry.has_lifted());
        entry.set_attempt(Lift::D, 1, 200.0, LiftStatus::Failed);
        assert!(entry.has_lifted());
    }

    #[test]
    fn test_validate_rejects_negative_weights() {
        let mut entry = Entry::new(7);
        entry.squat_kg[1] = -5.0;
        assert!(matches!(
            entry.validate(),
            Err(Error::InvalidEntry { id: 7, .. })
        ));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 3,
            "name": "Jane Doe",
            "sex": "F",
            "equipment": "Single-ply",
            "events": ["SBD", "B"],
            "bodyweightKg": 62.4,
            "squatKg": [120, 127.5, 0, 0, 0],
            "squatStatus": [1, -1, 0, 0, 0]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, 3);
        assert_eq!(entry.sex, Sex::F);
        assert_eq!(entry.equipment, Equipment::SinglePly);
        assert_eq!(entry.events, vec![Event::Sbd, Event::B]);
        assert_eq!(entry.weight(Lift::S, 2), 127.5);
        assert_eq!(entry.status(Lift::S, 2), LiftStatus::Failed);
        assert_eq!(entry.day, 1);
    }
}
