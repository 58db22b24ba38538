//! Meet records command.

use std::path::Path;

use anyhow::{Context, Result};
use barbell_core::export::{format_records_console, format_records_tsv, record_rows, to_json};
use barbell_core::records::confirm_records;
use tracing::info;

use crate::cli::OutputFormat;
use crate::commands::load_meet;

pub fn run(meet_path: &Path, confirm: bool, format: OutputFormat) -> Result<()> {
    let mut meet = load_meet(meet_path)?;

    let previous = meet.records.clone();
    let set = confirm_records(&mut meet.records, &meet.config, &meet.entries);
    let rows = record_rows(&set, &previous, meet.config.unit);

    let content = match format {
        OutputFormat::Console => format_records_console(&rows, meet.config.unit),
        OutputFormat::Tsv => format_records_tsv(&rows),
        OutputFormat::Json => to_json(&rows)?,
    };
    println!("{}", content.trim_end());

    if confirm && !set.is_empty() {
        meet.save(meet_path)
            .with_context(|| format!("failed to save meet {}", meet_path.display()))?;
        info!("Wrote {} records to {}", set.len(), meet_path.display());
    }

    Ok(())
}
