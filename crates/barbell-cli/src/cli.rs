//! CLI argument definitions for barbell.

use std::path::PathBuf;

use barbell_core::{Flight, Lift};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "barbell")]
#[command(about = "Powerlifting meet scoring engine", version)]
pub struct Args {
    /// Output format
    #[arg(long, short, value_enum, global = true, default_value = "console")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the lifting order for a flight
    Order {
        /// Meet snapshot (JSON)
        meet: PathBuf,
        /// Competition day (defaults to the snapshot's lifting state)
        #[arg(long)]
        day: Option<u32>,
        /// Platform number
        #[arg(long)]
        platform: Option<u32>,
        /// Flight letter (A-P)
        #[arg(long)]
        flight: Option<Flight>,
        /// Lift (S, B or D)
        #[arg(long)]
        lift: Option<Lift>,
        /// Force the active attempt (1-5)
        #[arg(long)]
        attempt: Option<usize>,
        /// Force the current lifter by entry id
        #[arg(long)]
        entry: Option<u32>,
    },
    /// Place every entry in its categories
    Results {
        /// Meet snapshot (JSON)
        meet: PathBuf,
        /// Count pending attempts as if they will be made
        #[arg(long)]
        projected: bool,
    },
    /// Rank entries by points formula
    Rankings {
        /// Meet snapshot (JSON)
        meet: PathBuf,
        /// Formula name (defaults to the meet's formula)
        #[arg(long)]
        formula: Option<String>,
    },
    /// Show records set at this meet, optionally writing them to the record book
    Records {
        /// Meet snapshot (JSON)
        meet: PathBuf,
        /// Write the confirmed records back into the snapshot
        #[arg(long)]
        confirm: bool,
    },
    /// Show cumulative team scores
    Teams {
        /// Meet snapshot (JSON)
        meet: PathBuf,
    },
    /// Score a single total
    Points {
        /// Formula name, e.g. "Dots" or "IPF GL Points"
        #[arg(long, default_value = "Dots")]
        formula: String,
        /// Sex (F, M or Mx)
        #[arg(long, default_value = "M")]
        sex: String,
        /// Equipment, e.g. "Sleeves" or "Single-ply"
        #[arg(long, default_value = "Sleeves")]
        equipment: String,
        /// Event, e.g. "SBD" or "B"
        #[arg(long, default_value = "SBD")]
        event: String,
        /// Bodyweight in kg
        #[arg(long)]
        bodyweight: f64,
        /// Total in kg
        #[arg(long)]
        total: f64,
        /// Age for Foster-McCulloch adjustment
        #[arg(long)]
        age: Option<u32>,
    },
    /// Select plates for one side of the bar
    Barload {
        /// Bar weight to load, in kg
        weight: f64,
        /// Previous loading, in kg; plates already on the bar are marked
        #[arg(long)]
        previous: Option<f64>,
        /// Take bar, collars and plates from this meet snapshot
        #[arg(long)]
        meet: Option<PathBuf>,
        /// Lift whose bar is used
        #[arg(long, default_value = "S")]
        lift: Lift,
    },
    /// Draw random lot numbers, sequenced by flight
    Lots {
        /// Meet snapshot (JSON)
        meet: PathBuf,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
        /// Write the updated snapshot here instead of printing the lots
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Console,
    Tsv,
    Json,
}
