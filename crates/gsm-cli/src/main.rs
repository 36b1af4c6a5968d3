use std::error::Error;
use std::io::IsTerminal;

use clap::{Parser, Subcommand};
use commands::{
    contributors::{self, ContributorsArgs},
    export::{self, ExportArgs},
    predict::{self, PredictArgs},
    series::{self, SeriesArgs},
    version::{self, VersionArgs},
    versions::{self, VersionsArgs},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "gsm", about = "Geometric string map prediction toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute predictions for one parameter set.
    Predict(PredictArgs),
    /// Sample predictions across energy scales for charting.
    Series(SeriesArgs),
    /// Write a calculation export document.
    Export(ExportArgs),
    /// Summarise the contributors wall.
    Contributors(ContributorsArgs),
    /// Inspect or compare entries of the version history.
    Versions(VersionsArgs),
    /// Print the toolkit version.
    Version(VersionArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal());
    Registry::default().with(filter).with(fmt_layer).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Predict(args) => predict::run(&args),
        Command::Series(args) => series::run(&args),
        Command::Export(args) => export::run(&args),
        Command::Contributors(args) => contributors::run(&args),
        Command::Versions(args) => versions::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
