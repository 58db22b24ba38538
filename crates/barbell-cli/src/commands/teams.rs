//! Team scores command.

use std::path::Path;

use anyhow::Result;
use barbell_core::export::{format_teams_console, format_teams_tsv, to_json};
use barbell_core::team_results;

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(meet_path: &Path, format: OutputFormat) -> Result<()> {
    let meet = load_meet(meet_path)?;
    let teams = team_results(
        &meet.entries,
        &meet.config.weight_classes,
        meet.config.equipment_merge,
    );

    if teams.is_empty() {
        eprintln!("No entries belong to a team");
        return Ok(());
    }

    let content = match format {
        OutputFormat::Console => format_teams_console(&teams),
        OutputFormat::Tsv => format_teams_tsv(&teams),
        OutputFormat::Json => to_json(&teams)?,
    };
    println!("{}", content.trim_end());

    Ok(())
}
