//! Single-total points command.

use anyhow::Result;
use barbell_core::{AgeCoefficients, Entry, Equipment, Event, Formula, Scorer, Sex};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::cli::OutputFormat;

/// Lifter and total to score, as given on the command line.
#[derive(Debug, Clone)]
pub struct PointsQuery {
    pub formula: String,
    pub sex: String,
    pub equipment: String,
    pub event: String,
    pub bodyweight: f64,
    pub total: f64,
    pub age: Option<u32>,
}

pub fn run(query: &PointsQuery, format: OutputFormat) -> Result<()> {
    let formula = Formula::parse(&query.formula)?;
    let event = Event::parse(&query.event)?;

    let mut entry = Entry::new(0);
    entry.sex = Sex::parse(&query.sex)?;
    entry.equipment = Equipment::parse(&query.equipment)?;
    entry.events = vec![event];
    entry.bodyweight_kg = query.bodyweight;

    let mut scorer = Scorer::new(formula);
    if let Some(age) = query.age {
        entry.age = age;
        scorer.age_coefficients = AgeCoefficients::FosterMcCulloch;
    }

    let points = scorer.age_adjusted_points(&entry, event, query.total);
    let display = barbell_core::units::display_weight(points);

    match format {
        OutputFormat::Console => println!("{}: {}", formula.bold(), display.green()),
        OutputFormat::Tsv => println!("Formula\tPoints\n{}\t{}", formula, display),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "formula": formula,
                "points": points,
            }))?
        ),
    }

    Ok(())
}
