//! Lifting order command.

use std::path::Path;

use anyhow::{Result, bail};
use barbell_core::config::attempts::MAX_ATTEMPTS;
use barbell_core::export::{
    format_order_console, format_order_tsv, mark_record_attempts, order_rows, to_json,
};
use barbell_core::order::entries_in_flight;
use barbell_core::{Flight, Lift, LiftingState, resolve};
use tracing::warn;

use crate::cli::OutputFormat;
use crate::commands::load_meet;

/// Command-line replacements for the snapshot's lifting state.
#[derive(Debug, Default)]
pub struct StateOverrides {
    pub day: Option<u32>,
    pub platform: Option<u32>,
    pub flight: Option<Flight>,
    pub lift: Option<Lift>,
    pub attempt: Option<usize>,
    pub entry: Option<u32>,
}

impl StateOverrides {
    pub fn apply(&self, state: &mut LiftingState) {
        if let Some(day) = self.day {
            state.day = day;
        }
        if let Some(platform) = self.platform {
            state.platform = platform;
        }
        if let Some(flight) = self.flight {
            state.flight = flight;
        }
        if let Some(lift) = self.lift {
            state.lift = lift;
        }
        if self.attempt.is_some() {
            state.override_attempt = self.attempt;
        }
        if self.entry.is_some() {
            state.override_entry_id = self.entry;
        }
    }
}

pub fn run(meet_path: &Path, overrides: StateOverrides, format: OutputFormat) -> Result<()> {
    let meet = load_meet(meet_path)?;
    let mut state = meet.lifting.clone();
    overrides.apply(&mut state);

    if let Some(attempt) = state
        .override_attempt
        .filter(|a| !(1..=MAX_ATTEMPTS).contains(a))
    {
        bail!("attempt must be between 1 and {}, got {}", MAX_ATTEMPTS, attempt);
    }

    let flight = entries_in_flight(&meet.entries, &state);
    if flight.is_empty() {
        warn!(
            "No entries on day {} platform {} flight {}",
            state.day, state.platform, state.flight
        );
    }

    let order = resolve(&flight, &state);
    let unit = meet.config.unit;
    let mut rows = order_rows(&order, unit);
    mark_record_attempts(&mut rows, &order, &meet.records, &meet.config.weight_classes);

    let content = match format {
        OutputFormat::Console => format_order_console(&order, &rows, unit),
        OutputFormat::Tsv => format_order_tsv(&rows),
        OutputFormat::Json => to_json(&rows)?,
    };
    println!("{}", content.trim_end());

    Ok(())
}
