//! # shipnet-cli — Command-Line Interface
//!
//! Adapters around the routing engine: a file-backed data source, text and
//! JSON reports, and Graphviz DOT rendering of the network with resolved
//! routes highlighted.
//!
//! ## Subcommands
//!
//! - `resolve` — Resolve every shipment in a network file and report.
//! - `graph` — List the network's routes, or emit it as DOT.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate routing to `shipnet-routing`; no routing logic here.

pub mod config;
pub mod graph;
pub mod render;
pub mod report;
pub mod resolve;
pub mod source;
