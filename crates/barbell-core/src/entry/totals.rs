//! Best lifts and competition totals.

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::entry::{Entry, Event, Lift, LiftStatus};

/// Attempts that count toward the competition total.
pub const COUNTED_ATTEMPTS: usize = 3;

/// How a total is computed.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum ResultsMode {
    /// Optimistically counts an untaken first attempt as if it were good.
    /// Used for live standings while lifters are still lifting.
    Projected,
    /// Counts only successful attempts.
    #[default]
    Final,
}

impl Entry {
    /// Best successful attempt among the first three.
    pub fn best3(&self, lift: Lift) -> f64 {
        best_of(self, lift, COUNTED_ATTEMPTS, |_, status| {
            status == LiftStatus::Successful
        })
    }

    /// Best successful attempt, including extra attempts that don't count.
    pub fn best5(&self, lift: Lift) -> f64 {
        best_of(self, lift, self.weights(lift).len(), |_, status| {
            status == LiftStatus::Successful
        })
    }

    /// Best of the first three where an untaken first attempt counts.
    pub fn projected_best3(&self, lift: Lift) -> f64 {
        best_of(self, lift, COUNTED_ATTEMPTS, |index, status| {
            if index == 0 {
                status != LiftStatus::Failed
            } else {
                status == LiftStatus::Successful
            }
        })
    }

    pub fn best_for(&self, lift: Lift, mode: ResultsMode) -> f64 {
        match mode {
            ResultsMode::Projected => self.projected_best3(lift),
            ResultsMode::Final => self.best3(lift),
        }
    }

    /// Total restricted to the lifts contested in `event`.
    ///
    /// Forced to zero when any contested lift has no counted result and its
    /// first attempt was a recorded failure. An untaken first attempt does
    /// not zero the total.
    pub fn event_total(&self, event: Event, mode: ResultsMode) -> f64 {
        let mut total = 0.0;
        for &lift in event.lifts() {
            let best = self.best_for(lift, mode);
            if best == 0.0 && self.first_attempt_status(lift) == LiftStatus::Failed {
                return 0.0;
            }
            total += best;
        }
        total
    }

    pub fn projected_event_total(&self, event: Event) -> f64 {
        self.event_total(event, ResultsMode::Projected)
    }

    pub fn final_event_total(&self, event: Event) -> f64 {
        self.event_total(event, ResultsMode::Final)
    }

    pub fn projected_total(&self) -> f64 {
        self.event_total(Event::Sbd, ResultsMode::Projected)
    }

    pub fn final_total(&self) -> f64 {
        self.event_total(Event::Sbd, ResultsMode::Final)
    }

    /// Last lift of `event`, in S/B/D order, with any successful attempt.
    pub fn last_successful_lift(&self, event: Event) -> Option<Lift> {
        event
            .lifts()
            .iter()
            .rev()
            .copied()
            .find(|&lift| self.statuses(lift).contains(&LiftStatus::Successful))
    }

    /// One-indexed number of the last successful counted attempt for `lift`.
    pub fn last_successful_attempt(&self, lift: Lift) -> Option<usize> {
        self.statuses(lift)[..COUNTED_ATTEMPTS]
            .iter()
            .rposition(|&s| s == LiftStatus::Successful)
            .map(|i| i + 1)
    }

    fn first_attempt_status(&self, lift: Lift) -> LiftStatus {
        self.statuses(lift)[0]
    }
}

fn best_of(entry: &Entry, lift: Lift, count: usize, counts: impl Fn(usize, LiftStatus) -> bool) -> f64 {
    entry
        .weights(lift)
        .iter()
        .zip(entry.statuses(lift))
        .take(count)
        .enumerate()
        .filter(|(i, (_, status))| counts(*i, **status))
        .fold(0.0_f64, |best, (_, (weight, _))| best.max(*weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LiftStatus::{Failed, NotAttempted, Successful};

    fn entry_with(lift: Lift, weights: [f64; 5], statuses: [LiftStatus; 5]) -> Entry {
        let mut entry = Entry::new(1);
        *entry.weights_mut(lift) = weights;
        *entry.statuses_mut(lift) = statuses;
        entry
    }

    #[test]
    fn test_best3_ignores_fourth_attempts() {
        let entry = entry_with(
            Lift::S,
            [100.0, 110.0, 120.0, 130.0, 0.0],
            [Successful, Successful, Failed, Successful, NotAttempted],
        );
        assert_eq!(entry.best3(Lift::S), 110.0);
        assert_eq!(entry.best5(Lift::S), 130.0);
    }

    #[test]
    fn test_projected_counts_untaken_first_attempt_only() {
        let entry = entry_with(
            Lift::B,
            [100.0, 110.0, 0.0, 0.0, 0.0],
            [NotAttempted, NotAttempted, NotAttempted, NotAttempted, NotAttempted],
        );
        assert_eq!(entry.projected_best3(Lift::B), 100.0);
        assert_eq!(entry.best3(Lift::B), 0.0);
    }

    #[test]
    fn test_failed_first_attempt_zeroes_total() {
        let mut entry = entry_with(
            Lift::S,
            [200.0, 200.0, 200.0, 0.0, 0.0],
            [Failed, Failed, Failed, NotAttempted, NotAttempted],
        );
        entry.set_attempt(Lift::B, 1, 120.0, Successful);
        entry.set_attempt(Lift::D, 1, 250.0, Successful);

        assert_eq!(entry.final_total(), 0.0);
        assert_eq!(entry.projected_total(), 0.0);
        // Bench-only total doesn't contest the squat.
        assert_eq!(entry.event_total(Event::B, ResultsMode::Final), 120.0);
    }

    #[test]
    fn test_untaken_lift_does_not_zero_total() {
        let mut entry = Entry::new(1);
        entry.set_attempt(Lift::S, 1, 200.0, Successful);
        entry.set_attempt(Lift::B, 1, 120.0, NotAttempted);

        assert_eq!(entry.final_total(), 200.0);
        assert_eq!(entry.projected_total(), 320.0);
    }

    #[test]
    fn test_last_successful_lift_and_attempt() {
        let mut entry = Entry::new(1);
        entry.set_attempt(Lift::S, 1, 200.0, Successful);
        entry.set_attempt(Lift::B, 1, 120.0, Successful);
        entry.set_attempt(Lift::B, 2, 125.0, Successful);
        entry.set_attempt(Lift::B, 3, 130.0, Failed);
        entry.set_attempt(Lift::D, 1, 250.0, Failed);

        assert_eq!(entry.last_successful_lift(Event::Sbd), Some(Lift::B));
        assert_eq!(entry.last_successful_lift(Event::S), Some(Lift::S));
        assert_eq!(entry.last_successful_lift(Event::D), None);
        assert_eq!(entry.last_successful_attempt(Lift::B), Some(2));
        assert_eq!(entry.last_successful_attempt(Lift::D), None);
    }
}
