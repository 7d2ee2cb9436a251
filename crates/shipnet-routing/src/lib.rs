//! # shipnet-routing — Routing Engine
//!
//! Computes minimum-distance routes over a directed, weighted network and
//! resolves batches of shipment requests against it.
//!
//! - **Graph** ([`graph`]): adjacency structure built once from an edge
//!   list. Immutable after construction.
//!
//! - **Dijkstra** ([`dijkstra`]): single-source shortest distances and
//!   predecessors with a deterministic (distance, node) priority order.
//!
//! - **Path** ([`path`]): walks a predecessor map back from a destination
//!   to produce the explicit node sequence.
//!
//! - **Resolver** ([`resolver`]): per-request orchestration producing one
//!   [`ShipmentResult`] per request, in input order.
//!
//! - **Source / Plan** ([`source`], [`plan`]): the data-source seam and the
//!   batch entry point that fails fast on configuration errors.
//!
//! ## Crate Policy
//!
//! - Depends only on `shipnet-core` internally.
//! - No I/O. Loading and rendering live behind [`NetworkSource`] and
//!   [`RouteObserver`] implementations supplied by the caller.
//! - No global state: the graph is always passed explicitly.

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod path;
pub mod plan;
pub mod resolver;
pub mod source;

pub use dijkstra::{shortest_paths, DistanceMap, PredecessorMap, ShortestPaths};
pub use error::{RoutingError, SourceError};
pub use graph::Graph;
pub use path::reconstruct;
pub use plan::{plan_shipments, ShipmentPlan};
pub use resolver::{
    format_distance, resolve, BatchSummary, NoopObserver, RouteObserver, ShipmentResolver,
    ShipmentResult, ShipmentStatus,
};
pub use source::{NetworkSource, StaticSource};
