//! Export formats for results, rankings, team scores, records and lifting order.
//!
//! Rows are built once as serializable structs, then rendered as TSV or JSON.
//! Weights are shown in the meet's unit.

mod console;

pub use console::*;

use serde::Serialize;

use crate::entry::{Entry, Event, Lift, ResultsMode, WeightClassConfig};
use crate::error::Result;
use crate::order::LiftingOrder;
use crate::place::{CategoryResults, PointsCategoryResults, TeamResults};
use crate::points::Scorer;
use crate::records::{LiftingRecord, RecordBook, RecordLift, record_attempt_lifts};
use crate::units::{WeightUnit, display_weight};

/// One placed entry in a category, ready for export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub category: String,
    pub place: String,
    pub name: String,
    pub team: String,
    pub bodyweight: String,
    pub best_squat: String,
    pub best_bench: String,
    pub best_deadlift: String,
    pub total: String,
    pub points: String,
}

/// One entry in a points ranking, ready for export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub category: String,
    pub rank: u32,
    pub name: String,
    pub bodyweight: String,
    pub total: String,
    pub points: String,
}

/// One entry in the lifting order, ready for export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub position: u32,
    pub name: String,
    pub lot: u32,
    pub weight: String,
    pub is_current: bool,
    pub is_next: bool,
    /// Records the pending attempt would break.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub record_lifts: Vec<RecordLift>,
}

/// One record set at the meet, ready for export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRow {
    pub category: String,
    pub lift: String,
    pub name: String,
    pub weight: String,
    pub previous: String,
}

fn weight_in(unit: WeightUnit, kg: f64) -> String {
    display_weight(unit.convert(kg))
}

/// Points are always shown with two decimals.
fn points_label(points: f64) -> String {
    format!("{:.2}", points)
}

fn best_in(entry: &Entry, lift: Lift, event: Event, mode: ResultsMode, unit: WeightUnit) -> String {
    if event.contains(lift) {
        weight_in(unit, entry.best_for(lift, mode))
    } else {
        String::new()
    }
}

pub fn result_rows(results: &[CategoryResults<'_>], scorer: &Scorer) -> Vec<ResultRow> {
    let unit = scorer.unit;
    let mut rows = Vec::new();
    for category_results in results {
        let category = category_results.category.to_string();
        let event = category_results.category.event;
        let mode = category_results.mode;
        let places = category_results.places();

        for (entry, place) in category_results.ordered_entries.iter().zip(places) {
            let total_kg = category_results.total_of(entry);
            rows.push(ResultRow {
                category: category.clone(),
                place: place.to_string(),
                name: entry.name.clone(),
                team: entry.team.clone(),
                bodyweight: weight_in(unit, entry.bodyweight_kg),
                best_squat: best_in(entry, Lift::S, event, mode, unit),
                best_bench: best_in(entry, Lift::B, event, mode, unit),
                best_deadlift: best_in(entry, Lift::D, event, mode, unit),
                total: weight_in(unit, total_kg),
                points: points_label(scorer.age_adjusted_points(entry, event, total_kg)),
            });
        }
    }
    rows
}

pub fn ranking_rows(rankings: &[PointsCategoryResults<'_>], unit: WeightUnit) -> Vec<RankingRow> {
    let mut rows = Vec::new();
    for ranking in rankings {
        let category = ranking.category.to_string();
        for (index, ranked) in ranking.ranked_entries.iter().enumerate() {
            rows.push(RankingRow {
                category: category.clone(),
                rank: index as u32 + 1,
                name: ranked.entry.name.clone(),
                bodyweight: weight_in(unit, ranked.entry.bodyweight_kg),
                total: weight_in(unit, ranked.total_kg),
                points: points_label(ranked.points),
            });
        }
    }
    rows
}

pub fn order_rows(order: &LiftingOrder<'_>, unit: WeightUnit) -> Vec<OrderRow> {
    order
        .ordered_entries
        .iter()
        .enumerate()
        .map(|(index, entry)| OrderRow {
            position: index as u32 + 1,
            name: entry.name.clone(),
            lot: entry.lot,
            weight: weight_in(unit, entry.weight(order.lift, order.attempt)),
            is_current: order.current_entry_id == Some(entry.id),
            is_next: order.next_entry_id == Some(entry.id),
            record_lifts: Vec::new(),
        })
        .collect()
}

/// Fill in the record lifts each entry's pending attempt is going for.
pub fn mark_record_attempts(
    rows: &mut [OrderRow],
    order: &LiftingOrder<'_>,
    book: &RecordBook,
    classes: &WeightClassConfig,
) {
    for (row, entry) in rows.iter_mut().zip(&order.ordered_entries) {
        row.record_lifts = record_attempt_lifts(book, classes, entry, order.lift, order.attempt);
    }
}

/// Rows for newly set records, with the mark each one replaces.
pub fn record_rows(set: &[LiftingRecord], previous: &RecordBook, unit: WeightUnit) -> Vec<RecordRow> {
    set.iter()
        .map(|record| {
            let key = record.key();
            RecordRow {
                category: format!(
                    "{} {} {} {} {}",
                    key.division, key.sex, key.weight_class, key.equipment, key.record_type
                ),
                lift: record.lift.expand_name().to_string(),
                name: record.full_name.clone(),
                weight: weight_in(unit, record.weight_kg),
                previous: previous
                    .get(&key)
                    .map(|old| weight_in(unit, old.weight_kg))
                    .unwrap_or_default(),
            }
        })
        .collect()
}

pub fn format_records_tsv(rows: &[RecordRow]) -> String {
    let mut lines = vec!["Category\tLift\tName\tWeight\tPrevious".to_string()];
    lines.extend(rows.iter().map(|row| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            row.category, row.lift, row.name, row.weight, row.previous
        )
    }));
    lines.join("\n")
}

pub fn format_results_tsv_header() -> String {
    [
        "Category",
        "Place",
        "Name",
        "Team",
        "Bodyweight",
        "Best Squat",
        "Best Bench",
        "Best Deadlift",
        "Total",
        "Points",
    ]
    .join("\t")
}

pub fn format_result_tsv_row(row: &ResultRow) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        row.category,
        row.place,
        row.name,
        row.team,
        row.bodyweight,
        row.best_squat,
        row.best_bench,
        row.best_deadlift,
        row.total,
        row.points
    )
}

pub fn format_results_tsv(results: &[CategoryResults<'_>], scorer: &Scorer) -> String {
    let mut lines = vec![format_results_tsv_header()];
    lines.extend(result_rows(results, scorer).iter().map(format_result_tsv_row));
    lines.join("\n")
}

pub fn format_rankings_tsv(rankings: &[PointsCategoryResults<'_>], unit: WeightUnit) -> String {
    let mut lines = vec!["Category\tRank\tName\tBodyweight\tTotal\tPoints".to_string()];
    for row in ranking_rows(rankings, unit) {
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.category, row.rank, row.name, row.bodyweight, row.total, row.points
        ));
    }
    lines.join("\n")
}

pub fn format_teams_tsv(teams: &[TeamResults]) -> String {
    let mut lines = vec!["Team\tPoints".to_string()];
    lines.extend(teams.iter().map(|t| format!("{}\t{}", t.team, t.points)));
    lines.join("\n")
}

pub fn format_order_tsv(rows: &[OrderRow]) -> String {
    let mut lines = vec!["Position\tName\tLot\tWeight\tStatus\tRecords".to_string()];
    for row in rows {
        let status = if row.is_current {
            "current"
        } else if row.is_next {
            "next"
        } else {
            ""
        };
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.position,
            row.name,
            row.lot,
            row.weight,
            status,
            record_labels(&row.record_lifts)
        ));
    }
    lines.join("\n")
}

fn record_labels(lifts: &[RecordLift]) -> String {
    lifts
        .iter()
        .map(|lift| lift.expand_name())
        .collect::<Vec<_>>()
        .join(",")
}

/// Pretty-printed JSON for any export value.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
