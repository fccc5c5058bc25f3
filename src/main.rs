//! Roadnet CLI entry point

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "roadnet")]
#[command(about = "Load and validate road network documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ./roadnet.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory that document paths are resolved against
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Accept zero for ids and attributes
    #[arg(long)]
    allow_zero: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and report its size
    Check {
        /// Document path, relative to the resource root
        path: String,
    },
    /// Load a document and print its tables as JSON
    Dump {
        /// Document path, relative to the resource root
        path: String,

        /// Which table to print
        #[arg(short, long, value_enum, default_value_t = Table::All)]
        table: Table,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Table {
    Nodes,
    Endpoints,
    Length,
    SpeedLimit,
    Capacity,
    All,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "roadnet={0},roadnet_core={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = roadnet_core::LoaderConfig::discover(cli.config.as_deref())?;
    if let Some(root) = cli.root {
        config.resource_root = root;
    }
    if cli.allow_zero {
        config.require_positive = false;
    }
    tracing::debug!("Resource root: {}", config.resource_root.display());

    match cli.command {
        Commands::Check { path } => commands::check(&config, &path),
        Commands::Dump { path, table } => commands::dump(&config, &path, table),
    }
}
