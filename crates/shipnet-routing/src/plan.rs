//! # Batch Planning
//!
//! Entry point that pulls a network and a shipment batch from a
//! [`NetworkSource`], builds the graph once, and resolves every shipment.
//!
//! Configuration problems (a failing source, an empty edge list) are
//! fatal and reported before any shipment is touched. Per-shipment
//! failures are encoded in the results and never abort the batch.

use crate::error::RoutingError;
use crate::graph::Graph;
use crate::resolver::{BatchSummary, RouteObserver, ShipmentResolver, ShipmentResult};
use crate::source::NetworkSource;

/// Everything produced by one planning run.
#[derive(Debug, Clone)]
pub struct ShipmentPlan {
    /// The graph the batch was resolved against.
    pub graph: Graph,
    /// One result per request, in request order.
    pub results: Vec<ShipmentResult>,
    /// Status counts over `results`.
    pub summary: BatchSummary,
}

/// Load, build, and resolve a full batch.
///
/// # Errors
///
/// - [`RoutingError::Source`] if the source cannot produce edges or
///   shipments.
/// - [`RoutingError::EmptyNetwork`] if the source produced no edges.
pub fn plan_shipments(
    source: &dyn NetworkSource,
    observer: &mut dyn RouteObserver,
) -> Result<ShipmentPlan, RoutingError> {
    let edges = source.edges()?;
    if edges.is_empty() {
        return Err(RoutingError::EmptyNetwork);
    }
    let requests = source.shipments()?;

    let graph = Graph::build(&edges);
    let results = ShipmentResolver::new(&graph).resolve_with(&requests, observer);
    let summary = BatchSummary::from_results(&results);

    Ok(ShipmentPlan {
        graph,
        results,
        summary,
    })
}
