use std::collections::HashMap;

use serde::Serialize;

use crate::entry::{Entry, ResultsMode, WeightClassConfig};
use crate::place::{EquipmentMergePolicy, place_all};

/// Points awarded to the teams of the first three places in a category.
const PLACE_POINTS: [u32; 3] = [3, 2, 1];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResults {
    pub team: String,
    pub points: u32,
}

/// Cumulative team points over every final category.
///
/// Every team named by an entry is listed, even with zero points.
pub fn team_results(
    entries: &[Entry],
    classes: &WeightClassConfig,
    merge: EquipmentMergePolicy,
) -> Vec<TeamResults> {
    let mut points: HashMap<&str, u32> = entries
        .iter()
        .filter(|e| !e.team.is_empty())
        .map(|e| (e.team.as_str(), 0))
        .collect();

    for results in place_all(entries, classes, merge, ResultsMode::Final) {
        let event = results.category.event;
        for (entry, award) in results.ordered_entries.iter().zip(PLACE_POINTS) {
            if entry.team.is_empty() || entry.final_event_total(event) <= 0.0 {
                continue;
            }
            if let Some(team_points) = points.get_mut(entry.team.as_str()) {
                *team_points += award;
            }
        }
    }

    let mut teams: Vec<TeamResults> = points
        .into_iter()
        .map(|(team, points)| TeamResults {
            team: team.to_string(),
            points,
        })
        .collect();
    teams.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team)));
    teams
}
