//! Points rankings command.

use std::path::Path;

use anyhow::Result;
use barbell_core::export::{format_rankings_console, format_rankings_tsv, ranking_rows, to_json};
use barbell_core::{Formula, Scorer, rank_by_points};

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(meet_path: &Path, formula: Option<&str>, format: OutputFormat) -> Result<()> {
    let meet = load_meet(meet_path)?;

    let mut scorer = Scorer::from_config(&meet.config);
    if let Some(name) = formula {
        scorer.formula = Formula::parse(name)?;
    }

    let rankings = rank_by_points(&meet.entries, &scorer, meet.config.equipment_merge);
    let content = match format {
        OutputFormat::Console => format_rankings_console(&rankings, &scorer),
        OutputFormat::Tsv => format_rankings_tsv(&rankings, scorer.unit),
        OutputFormat::Json => to_json(&ranking_rows(&rankings, scorer.unit))?,
    };
    println!("{}", content.trim_end());

    Ok(())
}
