#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    AnalyzeInput, AnalyzeStrategy, CommandStrategy, InitStrategy, RulesStrategy, VersionStrategy,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msgtriage")]
#[command(about = "Classify a chat message dump into an action/object/case report", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, classify and write the CSV report
    Analyze {
        /// Message dump to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// CSV report to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to ~/msgtriage/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the default configuration file
    Init {
        /// Where to write the config (defaults to ~/msgtriage/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective classification rules
    Rules {
        /// Config file (defaults to ~/msgtriage/config.json)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            input,
            output,
            config,
        } => AnalyzeStrategy.execute(AnalyzeInput {
            input,
            output,
            config,
        }),
        Commands::Init { config } => InitStrategy.execute(config),
        Commands::Rules { config } => RulesStrategy.execute(config),
        Commands::Version => VersionStrategy.execute(()),
    }
}
