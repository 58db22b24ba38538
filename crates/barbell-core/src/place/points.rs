use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::entry::{Entry, Equipment, Event, Sex};
use crate::place::EquipmentMergePolicy;
use crate::points::Scorer;

/// A points ranking group: weight classes and divisions are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsCategory {
    pub sex: Sex,
    pub event: Event,
    pub equipment: Equipment,
}

impl std::fmt::Display for PointsCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.sex, self.equipment, self.event)
    }
}

/// One ranked entry and the points it was ranked on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry<'a> {
    pub entry: &'a Entry,
    pub total_kg: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsCategoryResults<'a> {
    pub category: PointsCategory,
    pub ranked_entries: Vec<RankedEntry<'a>>,
}

/// Rank entries by age-adjusted points of their final total.
///
/// Guests rank last. Equal points go to the lighter lifter; full ties keep
/// input order.
pub fn rank_by_points<'a>(
    entries: &'a [Entry],
    scorer: &Scorer,
    merge: EquipmentMergePolicy,
) -> Vec<PointsCategoryResults<'a>> {
    let mut buckets: BTreeMap<PointsCategory, Vec<RankedEntry<'a>>> = BTreeMap::new();

    for entry in entries {
        let equipment = merge.for_points(entry.equipment);
        for &event in &entry.events {
            let total_kg = entry.final_event_total(event);
            let points = scorer.age_adjusted_points(entry, event, total_kg);
            let category = PointsCategory {
                sex: entry.sex,
                event,
                equipment,
            };
            buckets.entry(category).or_default().push(RankedEntry {
                entry,
                total_kg,
                points,
            });
        }
    }

    debug!(
        "Ranking {} entries by {} in {} groups",
        entries.len(),
        scorer.formula,
        buckets.len()
    );

    buckets
        .into_iter()
        .map(|(category, mut ranked_entries)| {
            ranked_entries.sort_by(|a, b| {
                a.entry
                    .guest
                    .cmp(&b.entry.guest)
                    .then_with(|| b.points.total_cmp(&a.points))
                    .then_with(|| a.entry.bodyweight_kg.total_cmp(&b.entry.bodyweight_kg))
            });
            PointsCategoryResults {
                category,
                ranked_entries,
            }
        })
        .collect()
}
