use anyhow::Result;
use barbell_cli::cli::{Args, Command};
use barbell_cli::commands;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("barbell_cli=warn,barbell_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let format = args.format;
    match args.command {
        Command::Order {
            meet,
            day,
            platform,
            flight,
            lift,
            attempt,
            entry,
        } => commands::order::run(
            &meet,
            commands::order::StateOverrides {
                day,
                platform,
                flight,
                lift,
                attempt,
                entry,
            },
            format,
        ),
        Command::Results { meet, projected } => commands::results::run(&meet, projected, format),
        Command::Rankings { meet, formula } => {
            commands::rankings::run(&meet, formula.as_deref(), format)
        }
        Command::Records { meet, confirm } => commands::records::run(&meet, confirm, format),
        Command::Teams { meet } => commands::teams::run(&meet, format),
        Command::Points {
            formula,
            sex,
            equipment,
            event,
            bodyweight,
            total,
            age,
        } => commands::points::run(
            &commands::points::PointsQuery {
                formula,
                sex,
                equipment,
                event,
                bodyweight,
                total,
                age,
            },
            format,
        ),
        Command::Barload {
            weight,
            previous,
            meet,
            lift,
        } => commands::barload::run(weight, previous, meet.as_deref(), lift, format),
        Command::Lots { meet, seed, output } => {
            commands::lots::run(&meet, seed, output.as_deref(), format)
        }
    }
}
