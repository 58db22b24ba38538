//! Lot number draw command.

use std::path::Path;

use anyhow::Result;
use barbell_core::place::assign_lot_numbers;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::json;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(
    meet_path: &Path,
    seed: Option<u64>,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let mut meet = load_meet(meet_path)?;

    match seed {
        Some(seed) => assign_lot_numbers(&mut meet.entries, &mut StdRng::seed_from_u64(seed)),
        None => assign_lot_numbers(&mut meet.entries, &mut rand::rng()),
    }
    info!("Drew lots for {} entries", meet.entries.len());

    if let Some(output_path) = output {
        meet.save(output_path)?;
        eprintln!("Saved to: {}", output_path.display());
        return Ok(());
    }

    match format {
        OutputFormat::Console | OutputFormat::Tsv => {
            println!("Id\tName\tFlight\tLot");
            for entry in &meet.entries {
                println!("{}\t{}\t{}\t{}", entry.id, entry.name, entry.flight, entry.lot);
            }
        }
        OutputFormat::Json => {
            let lots: Vec<_> = meet
                .entries
                .iter()
                .map(|e| json!({ "id": e.id, "name": e.name, "lot": e.lot }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&lots)?);
        }
    }

    Ok(())
}
