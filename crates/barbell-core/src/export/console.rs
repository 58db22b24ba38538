//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::barload::LoadedPlate;
use crate::order::LiftingOrder;
use crate::place::{CategoryResults, PointsCategoryResults, TeamResults};
use crate::points::Scorer;
use crate::units::{WeightUnit, display_weight};

use super::{OrderRow, RecordRow, ranking_rows, result_rows};

/// Format division results, one block per category.
pub fn format_results_console(results: &[CategoryResults<'_>], scorer: &Scorer) -> String {
    let mut output = String::new();
    let mut current_category: Option<String> = None;

    for row in result_rows(results, scorer) {
        if current_category.as_deref() != Some(row.category.as_str()) {
            if current_category.is_some() {
                output.push('\n');
            }
            let _ = writeln!(output, "{}", row.category.bold());
            current_category = Some(row.category.clone());
        }
        let place = format!("{:>3}", row.place);
        let place = match row.place.as_str() {
            "DQ" => place.red().to_string(),
            "1" => place.truecolor(255, 200, 0).bold().to_string(),
            _ => place,
        };
        let _ = writeln!(
            output,
            "  {}  {:<24} {}  {:>7} {}",
            place,
            row.name,
            format!("{:>7}", row.bodyweight).dimmed(),
            row.total,
            format!("({})", row.points).dimmed()
        );
    }
    output
}

/// Format points rankings, one block per group.
pub fn format_rankings_console(
    rankings: &[PointsCategoryResults<'_>],
    scorer: &Scorer,
) -> String {
    let mut output = String::new();
    let mut current_category: Option<String> = None;

    for row in ranking_rows(rankings, scorer.unit) {
        if current_category.as_deref() != Some(row.category.as_str()) {
            if current_category.is_some() {
                output.push('\n');
            }
            let _ = writeln!(output, "{} ({})", row.category.bold(), scorer.formula);
            current_category = Some(row.category.clone());
        }
        let _ = writeln!(
            output,
            "  {:>3}  {:<24} {}  {}",
            row.rank,
            row.name,
            format!("{:>8}", row.points).green(),
            row.total.dimmed()
        );
    }
    output
}

pub fn format_teams_console(teams: &[TeamResults]) -> String {
    let mut output = String::new();
    for (index, team) in teams.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {:>3}  {} {}",
            index + 1,
            format!("{:<24}", team.team).bold(),
            team.points
        );
    }
    output
}

/// Format the lifting order, marking who is up and who is on deck.
pub fn format_order_console(order: &LiftingOrder<'_>, rows: &[OrderRow], unit: WeightUnit) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{} attempt {}",
        order.lift.expand_name().bold(),
        order.attempt
    );

    for row in rows {
        let marker = if row.is_current {
            ">".green().bold().to_string()
        } else if row.is_next {
            "-".yellow().to_string()
        } else {
            " ".to_string()
        };
        let _ = write!(
            output,
            "{} {:>3}  {:<24} {:>7}{}",
            marker,
            row.position,
            row.name,
            row.weight,
            unit
        );
        if !row.record_lifts.is_empty() {
            let lifts: Vec<&str> = row.record_lifts.iter().map(|l| l.expand_name()).collect();
            let _ = write!(output, "  {}", format!("record: {}", lifts.join(", ")).red().bold());
        }
        output.push('\n');
    }
    output
}

/// Format records set at the meet.
pub fn format_records_console(rows: &[RecordRow], unit: WeightUnit) -> String {
    if rows.is_empty() {
        return "No new records".to_string();
    }
    let mut output = String::new();
    for row in rows {
        let _ = writeln!(
            output,
            "{}  {:<8} {:<24} {}{}",
            row.category.bold(),
            row.lift,
            row.name,
            format!("{:>7}", row.weight).green().bold(),
            unit
        );
        if !row.previous.is_empty() {
            let _ = writeln!(output, "    {}", format!("was {}{}", row.previous, unit).dimmed());
        }
    }
    output
}

/// Format one side of the bar, each plate in its own color.
///
/// Plates already on the bar from the previous attempt are dimmed.
pub fn format_plates_console(plates: &[LoadedPlate]) -> String {
    let labels: Vec<String> = plates
        .iter()
        .map(|plate| {
            if plate.is_remainder() {
                return format!("{}?", display_weight(-plate.weight)).red().bold().to_string();
            }
            let label = display_weight(plate.weight);
            let colored = label.truecolor(plate.color.r, plate.color.g, plate.color.b);
            if plate.is_already_loaded {
                colored.dimmed().to_string()
            } else {
                colored.bold().to_string()
            }
        })
        .collect();
    labels.join(" ")
}

/// Plain one-line summary of a loading, without color.
pub fn format_plates_summary(plates: &[LoadedPlate]) -> String {
    if plates.is_empty() {
        return "bar only".to_string();
    }
    plates
        .iter()
        .map(|plate| {
            if plate.is_remainder() {
                format!("{}?", display_weight(-plate.weight))
            } else {
                display_weight(plate.weight)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barload::PlateColor;

    #[test]
    fn test_format_plates_summary() {
        let plates = vec![
            LoadedPlate::new(25.0, PlateColor::RED),
            LoadedPlate::new(2.5, PlateColor::BLACK),
            LoadedPlate::new(-0.2, PlateColor::RED),
        ];
        assert_eq!(format_plates_summary(&plates), "25 2.5 0.2?");
        assert_eq!(format_plates_summary(&[]), "bar only");
    }

    #[test]
    fn test_format_plates_console_keeps_weights() {
        let mut plates = vec![
            LoadedPlate::new(25.0, PlateColor::RED),
            LoadedPlate::new(1.25, PlateColor::GRAY),
        ];
        plates[0].is_already_loaded = true;

        let output = format_plates_console(&plates);
        assert!(output.contains("25"));
        assert!(output.contains("1.25"));
    }

    fn strip_ansi(line: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in line.chars() {
            match c {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => plain.push(c),
            }
        }
        plain
    }

    #[test]
    fn test_results_columns_align_with_color() {
        use crate::entry::{Entry, Event, Lift, LiftStatus, ResultsMode, WeightClassConfig};
        use crate::place::{EquipmentMergePolicy, place_all};
        use crate::points::Formula;

        let mut first = Entry::new(1);
        first.name = "First".to_string();
        first.bodyweight_kg = 82.5;
        first.events = vec![Event::B];
        first.set_attempt(Lift::B, 1, 150.0, LiftStatus::Successful);
        let mut second = first.clone();
        second.id = 2;
        second.name = "Second".to_string();
        second.set_attempt(Lift::B, 1, 140.0, LiftStatus::Successful);
        let mut dq = first.clone();
        dq.id = 3;
        dq.name = "Dq".to_string();
        dq.set_attempt(Lift::B, 1, 160.0, LiftStatus::Failed);

        let entries = vec![first, second, dq];
        let classes = WeightClassConfig {
            men_kg: vec![83.0],
            women_kg: vec![],
            mx_kg: vec![],
        };
        let results = place_all(
            &entries,
            &classes,
            EquipmentMergePolicy::default(),
            ResultsMode::Final,
        );
        let output = format_results_console(&results, &Scorer::new(Formula::Total));

        let rows: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        let points_column: Vec<Option<usize>> =
            rows.iter().map(|line| strip_ansi(line).find('(')).collect();
        assert!(points_column[0].is_some());
        assert_eq!(points_column[0], points_column[1]);
        assert_eq!(points_column[0], points_column[2]);
        assert!(strip_ansi(&output).contains("(150.00)"));
    }

    #[test]
    fn test_format_teams_console() {
        let teams = vec![
            TeamResults {
                team: "Red".to_string(),
                points: 5,
            },
            TeamResults {
                team: "Blue".to_string(),
                points: 2,
            },
        ];
        let output = format_teams_console(&teams);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Red"));
        assert!(output.contains('5'));
    }
}
