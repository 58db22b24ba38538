use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::config::attempts::MAX_ATTEMPTS;
use crate::entry::{Entry, Lift};
use crate::order::LiftingState;

/// Resolved lifting order for one flight.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingOrder<'a> {
    pub lift: Lift,
    /// One-indexed active attempt.
    pub attempt: usize,
    pub ordered_entries: Vec<&'a Entry>,
    pub current_entry_id: Option<u32>,
    pub next_entry_id: Option<u32>,
    pub next_attempt: Option<usize>,
}

impl<'a> LiftingOrder<'a> {
    pub fn current_entry(&self) -> Option<&'a Entry> {
        self.find(self.current_entry_id?)
    }

    pub fn next_entry(&self) -> Option<&'a Entry> {
        self.find(self.next_entry_id?)
    }

    fn find(&self, id: u32) -> Option<&'a Entry> {
        self.ordered_entries.iter().copied().find(|e| e.id == id)
    }
}

/// Compare two entries by their declared weights for a lift.
///
/// Lighter weight goes first. Ties fall to lot number when both entries have
/// one, then to the previous attempt, then to bodyweight, then to name.
pub fn compare_by_attempt(a: &Entry, b: &Entry, lift: Lift, attempt: usize) -> Ordering {
    compare_attempts(a, b, lift, attempt, true)
}

/// Like [`compare_by_attempt`], with lot numbers consulted only when `use_lots`.
///
/// Sorting callers pass the result of [`lots_comparable`] so a group mixing
/// drawn and undrawn lots still gets a total order.
pub(crate) fn compare_attempts(
    a: &Entry,
    b: &Entry,
    lift: Lift,
    attempt: usize,
    use_lots: bool,
) -> Ordering {
    // Attempts past the last slot carry no weight.
    if attempt > MAX_ATTEMPTS {
        return compare_attempts(a, b, lift, MAX_ATTEMPTS, use_lots);
    }

    let by_weight = a.weight(lift, attempt).total_cmp(&b.weight(lift, attempt));
    if by_weight != Ordering::Equal {
        return by_weight;
    }

    if use_lots && a.lot != 0 && b.lot != 0 && a.lot != b.lot {
        return a.lot.cmp(&b.lot);
    }

    // Keep the order of the previous round.
    if attempt > 1 {
        return compare_attempts(a, b, lift, attempt - 1, use_lots);
    }

    a.bodyweight_kg
        .total_cmp(&b.bodyweight_kg)
        .then_with(|| a.name.cmp(&b.name))
}

/// Lots break ties only when every entry in the group has one, or none do.
pub fn lots_comparable(entries: &[&Entry]) -> bool {
    let drawn = entries.iter().filter(|e| e.lot != 0).count();
    drawn == 0 || drawn == entries.len()
}

fn sort_by_attempt(entries: &mut [&Entry], lift: Lift, attempt: usize, use_lots: bool) {
    entries.sort_by(|a, b| compare_attempts(a, b, lift, attempt, use_lots));
}

/// Lowest pending attempt for one entry.
fn lowest_pending_attempt(entry: &Entry, lift: Lift) -> Option<usize> {
    (1..=MAX_ATTEMPTS).find(|&attempt| entry.is_pending(lift, attempt))
}

/// Highest attempt the entry has already taken.
fn highest_taken_attempt(entry: &Entry, lift: Lift) -> Option<usize> {
    (1..=MAX_ATTEMPTS)
        .rev()
        .find(|&attempt| entry.weight(lift, attempt) != 0.0 && entry.status(lift, attempt).is_taken())
}

/// One-indexed attempt the flight is on.
///
/// The lowest pending attempt across the flight wins. With nothing pending,
/// the flight rolls over to the attempt after the last one taken, except
/// that it never rolls from the third attempt into the fourth. An override
/// is clamped to the attempt slots that exist.
pub fn active_attempt(entries: &[&Entry], state: &LiftingState) -> usize {
    if let Some(attempt) = state.override_attempt {
        return attempt.clamp(1, MAX_ATTEMPTS);
    }

    let lift = state.lift;
    if let Some(pending) = entries
        .iter()
        .filter_map(|e| lowest_pending_attempt(e, lift))
        .min()
    {
        return pending;
    }

    match entries.iter().filter_map(|e| highest_taken_attempt(e, lift)).max() {
        Some(latest) if latest + 1 >= 4 => latest,
        Some(latest) => latest + 1,
        None => 1,
    }
}

/// Entries in display order for the active attempt.
///
/// Entries are grouped by whether they have a pending next attempt, a weight
/// at this attempt, or a weight at the previous attempt, and the groups are
/// shown in that order followed by everyone else. Each group is sorted by
/// the attempt it was selected on.
pub fn order_entries<'a>(entries: &[&'a Entry], lift: Lift, attempt: usize) -> Vec<&'a Entry> {
    let use_lots = lots_comparable(entries);
    let next = attempt.saturating_add(1);
    let has_next = next <= MAX_ATTEMPTS;
    let has_prev = attempt > 1;

    let mut by_next = Vec::new();
    let mut by_this = Vec::new();
    let mut by_prev = Vec::new();
    let mut not_lifting = Vec::new();

    for &entry in entries {
        if has_next && entry.is_pending(lift, next) {
            by_next.push(entry);
        } else if entry.weight(lift, attempt) != 0.0 {
            by_this.push(entry);
        } else if has_prev && entry.weight(lift, attempt - 1) != 0.0 {
            by_prev.push(entry);
        } else {
            not_lifting.push(entry);
        }
    }

    sort_by_attempt(&mut by_next, lift, next, use_lots);
    sort_by_attempt(&mut by_this, lift, attempt, use_lots);
    if has_prev {
        sort_by_attempt(&mut by_prev, lift, attempt - 1, use_lots);
    }
    sort_by_attempt(&mut not_lifting, lift, attempt, use_lots);

    by_next
        .into_iter()
        .chain(by_this)
        .chain(by_prev)
        .chain(not_lifting)
        .collect()
}

/// The first entry in order still waiting on the active attempt.
pub fn current_entry_id(ordered: &[&Entry], state: &LiftingState, attempt: usize) -> Option<u32> {
    if let Some(id) = state.override_entry_id {
        return Some(id);
    }
    ordered
        .iter()
        .find(|e| e.is_pending(state.lift, attempt))
        .map(|e| e.id)
}

/// The entry after the current one, and the attempt it will take.
///
/// Looks forward for the same attempt first, then wraps to the start of the
/// order for the following attempt.
pub fn next_entry(
    ordered: &[&Entry],
    lift: Lift,
    current_id: Option<u32>,
    attempt: usize,
) -> Option<(u32, usize)> {
    let position = ordered.iter().position(|e| Some(e.id) == current_id)?;

    if let Some(entry) = ordered[position + 1..]
        .iter()
        .find(|e| e.is_pending(lift, attempt))
    {
        return Some((entry.id, attempt));
    }

    let next = attempt.saturating_add(1);
    if next > MAX_ATTEMPTS {
        return None;
    }
    ordered[..position]
        .iter()
        .find(|e| e.is_pending(lift, next))
        .map(|e| (e.id, next))
}

/// Resolve the full lifting order for the entries of one flight.
pub fn resolve<'a>(entries: &[&'a Entry], state: &LiftingState) -> LiftingOrder<'a> {
    let attempt = active_attempt(entries, state);
    let ordered_entries = order_entries(entries, state.lift, attempt);
    let current_entry_id = current_entry_id(&ordered_entries, state, attempt);
    let next = next_entry(&ordered_entries, state.lift, current_entry_id, attempt);

    debug!(
        "Resolved {} attempt {} for {} entries: current={:?} next={:?}",
        state.lift.expand_name(),
        attempt,
        ordered_entries.len(),
        current_entry_id,
        next
    );

    LiftingOrder {
        lift: state.lift,
        attempt,
        ordered_entries,
        current_entry_id,
        next_entry_id: next.map(|(id, _)| id),
        next_attempt: next.map(|(_, attempt)| attempt),
    }
}
