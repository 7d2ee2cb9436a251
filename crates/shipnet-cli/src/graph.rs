//! # Graph Subcommand
//!
//! Prints the loaded route network, either as an edge listing or as a
//! Graphviz DOT digraph.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use shipnet_routing::{Graph, NetworkSource, RoutingError};

use crate::config::ShipnetConfig;
use crate::render::to_dot;
use crate::report::render_graph_listing;
use crate::resolve::load_source;

/// Arguments for the `shipnet graph` subcommand.
#[derive(Args, Debug, Default)]
pub struct GraphArgs {
    /// Network document (.json, .yaml, .yml).
    #[arg(long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Use the built-in reference network instead of a file.
    #[arg(long, conflicts_with = "network")]
    pub demo: bool,

    /// Emit DOT instead of the edge listing.
    #[arg(long)]
    pub dot: bool,
}

/// Render the network without printing.
pub fn graph_report(args: &GraphArgs, config: &ShipnetConfig) -> Result<String> {
    let source = load_source(args.network.as_deref(), args.demo, config)?;
    let edges = source
        .edges()
        .with_context(|| format!("failed to read routes from {}", source.location()))?;
    if edges.is_empty() {
        return Err(RoutingError::EmptyNetwork.into());
    }
    let graph = Graph::build(&edges);

    Ok(if args.dot {
        to_dot(&graph, None, source.warehouses())
    } else {
        render_graph_listing(&graph)
    })
}

/// Execute the graph subcommand.
pub fn run_graph(args: &GraphArgs, config: &ShipnetConfig) -> Result<u8> {
    let out = graph_report(args, config)?;
    println!("{}", out.trim_end());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_listing() {
        let args = GraphArgs {
            demo: true,
            ..Default::default()
        };
        let out = graph_report(&args, &ShipnetConfig::default()).unwrap();
        assert!(out.contains("A -> B : 5.0\n"));
        assert!(out.contains("C -> D : 1.5\n"));
        assert!(out.contains("4 nodes, 5 routes"));
    }

    #[test]
    fn demo_dot_carries_city_labels() {
        let args = GraphArgs {
            demo: true,
            dot: true,
            ..Default::default()
        };
        let out = graph_report(&args, &ShipnetConfig::default()).unwrap();
        assert!(out.starts_with("digraph routes {"));
        assert!(out.contains("\"D\" [label=\"D\\nSevilla\"];"));
        assert!(!out.contains("color=red"));
    }

    #[test]
    fn configured_network_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.json");
        std::fs::write(
            &path,
            r#"{"routes": [{"origin": "P", "destination": "Q", "distance": 7}]}"#,
        )
        .unwrap();
        let config = ShipnetConfig {
            network: Some(path),
            ..Default::default()
        };
        let out = graph_report(&GraphArgs::default(), &config).unwrap();
        assert!(out.contains("P -> Q : 7.0\n"));
    }
}
