use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::entry::{Entry, Event, ResultsMode, WeightClassConfig};
use crate::order::{compare_attempts, lots_comparable};
use crate::place::{Category, CategoryResults, EquipmentMergePolicy};

/// Rank every entry within every category it competes in.
///
/// An entry appears once per (division, event) pair it registered for; an
/// entry with no divisions is placed under the empty division. Results come
/// back in presentation order.
pub fn place_all<'a>(
    entries: &'a [Entry],
    classes: &WeightClassConfig,
    merge: EquipmentMergePolicy,
    mode: ResultsMode,
) -> Vec<CategoryResults<'a>> {
    let mut buckets: BTreeMap<Category, Vec<&'a Entry>> = BTreeMap::new();

    for entry in entries {
        let weight_class = classes.classify(entry.sex, entry.bodyweight_kg);
        let equipment = merge.for_division(entry.equipment);

        let no_division = [String::new()];
        let divisions = if entry.divisions.is_empty() {
            &no_division[..]
        } else {
            &entry.divisions[..]
        };

        for division in divisions {
            for &event in &entry.events {
                let category = Category {
                    sex: entry.sex,
                    event,
                    equipment,
                    division: division.clone(),
                    weight_class,
                };
                let bucket = buckets.entry(category).or_default();
                if !bucket.iter().any(|e| e.id == entry.id) {
                    bucket.push(entry);
                }
            }
        }
    }

    debug!(
        "Placing {} entries into {} categories ({:?})",
        entries.len(),
        buckets.len(),
        mode
    );

    buckets
        .into_iter()
        .map(|(category, mut ordered_entries)| {
            sort_by_place(&mut ordered_entries, category.event, mode);
            CategoryResults {
                category,
                mode,
                ordered_entries,
            }
        })
        .collect()
}

/// Sort entries of one category so that first place comes first.
pub fn sort_by_place(entries: &mut [&Entry], event: Event, mode: ResultsMode) {
    let use_lots = lots_comparable(entries);
    entries.sort_by(|a, b| compare_for_place(a, b, event, mode, use_lots));
}

fn compare_for_place(a: &Entry, b: &Entry, event: Event, mode: ResultsMode, use_lots: bool) -> Ordering {
    // Guests never place above a non-guest.
    if a.guest != b.guest {
        return a.guest.cmp(&b.guest);
    }

    let a_total = a.event_total(event, mode);
    let b_total = b.event_total(event, mode);

    b_total
        .total_cmp(&a_total)
        .then_with(|| a.bodyweight_kg.total_cmp(&b.bodyweight_kg))
        .then_with(|| {
            if a_total == 0.0 {
                a.name.cmp(&b.name)
            } else {
                compare_reached_first(a, b, event, use_lots)
            }
        })
}

/// Equal totals at equal bodyweight go to whoever reached the total first.
fn compare_reached_first(a: &Entry, b: &Entry, event: Event, use_lots: bool) -> Ordering {
    let first_lift = event.lifts()[0];
    let a_lift = a.last_successful_lift(event).unwrap_or(first_lift);
    let b_lift = b.last_successful_lift(event).unwrap_or(first_lift);
    if a_lift != b_lift {
        return a_lift.cmp(&b_lift);
    }

    let a_attempt = a.last_successful_attempt(a_lift).unwrap_or(1);
    let b_attempt = b.last_successful_attempt(b_lift).unwrap_or(1);
    if a_attempt != b_attempt {
        return a_attempt.cmp(&b_attempt);
    }

    compare_attempts(a, b, a_lift, a_attempt, use_lots)
}
