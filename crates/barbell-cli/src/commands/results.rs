//! Division results command.

use std::path::Path;

use anyhow::Result;
use barbell_core::export::{format_results_console, format_results_tsv, result_rows, to_json};
use barbell_core::{ResultsMode, Scorer, place_all};

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(meet_path: &Path, projected: bool, format: OutputFormat) -> Result<()> {
    let meet = load_meet(meet_path)?;
    let mode = if projected {
        ResultsMode::Projected
    } else {
        ResultsMode::Final
    };

    let results = place_all(
        &meet.entries,
        &meet.config.weight_classes,
        meet.config.equipment_merge,
        mode,
    );
    let scorer = Scorer::from_config(&meet.config);

    let content = match format {
        OutputFormat::Console => format_results_console(&results, &scorer),
        OutputFormat::Tsv => format_results_tsv(&results, &scorer),
        OutputFormat::Json => to_json(&result_rows(&results, &scorer))?,
    };
    println!("{}", content.trim_end());

    Ok(())
}
