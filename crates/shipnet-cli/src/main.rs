//! # shipnet CLI entry point
//!
//! Parses command-line arguments, sets up logging, loads configuration,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shipnet_cli::config::ShipnetConfig;
use shipnet_cli::graph::{run_graph, GraphArgs};
use shipnet_cli::resolve::{run_resolve, ResolveArgs};

/// Shipment route resolver.
///
/// Loads a directed, weighted network of warehouses and a batch of
/// shipment requests, then finds the minimum-distance route for each.
#[derive(Parser, Debug)]
#[command(name = "shipnet", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve every shipment in a network document and print a report.
    Resolve(ResolveArgs),

    /// Print the route network as an edge listing or DOT.
    Graph(GraphArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("shipnet CLI starting");

    let config = match ShipnetConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(&args, &config),
        Commands::Graph(args) => run_graph(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
