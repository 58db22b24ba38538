//! Plate loading command.

use std::path::Path;

use anyhow::{Result, bail};
use barbell_core::barload::loaded_weight;
use barbell_core::config::plates::{BAR_AND_COLLARS_KG, default_plates};
use barbell_core::export::{format_plates_console, format_plates_summary, to_json};
use barbell_core::units::display_weight;
use barbell_core::{Lift, WeightUnit, make_relative, select_plates};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(
    weight_kg: f64,
    previous_kg: Option<f64>,
    meet_path: Option<&Path>,
    lift: Lift,
    format: OutputFormat,
) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        bail!("weight must be a positive number of kilograms");
    }

    let (bar_kg, plates, unit) = match meet_path {
        Some(path) => {
            let meet = load_meet(path)?;
            (
                meet.config.bar_and_collars.for_lift(lift),
                meet.config.plates,
                meet.config.unit,
            )
        }
        None => (BAR_AND_COLLARS_KG, default_plates(), WeightUnit::Kg),
    };

    let mut loading = select_plates(weight_kg, bar_kg, &plates, unit);
    if let Some(previous_kg) = previous_kg {
        let previous = select_plates(previous_kg, bar_kg, &plates, unit);
        make_relative(&mut loading, &previous);
    }

    let bar = unit.convert(bar_kg);
    if loaded_weight(&loading, bar).is_none() {
        warn!("{} kg cannot be loaded exactly with the available plates", weight_kg);
    }

    match format {
        OutputFormat::Console => {
            println!(
                "{} {} (bar {}{})",
                display_weight(unit.convert(weight_kg)),
                unit,
                display_weight(bar),
                unit
            );
            println!("{}", format_plates_console(&loading));
        }
        OutputFormat::Tsv => {
            println!("Weight\tColor\tAlreadyLoaded");
            for plate in &loading {
                println!(
                    "{}\t{}\t{}",
                    display_weight(plate.weight),
                    plate.color,
                    plate.is_already_loaded
                );
            }
            eprintln!("{}", format_plates_summary(&loading));
        }
        OutputFormat::Json => println!("{}", to_json(&loading)?),
    }

    Ok(())
}
