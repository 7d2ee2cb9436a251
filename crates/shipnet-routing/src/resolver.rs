//! # Shipment Resolver
//!
//! Resolves each [`ShipmentRequest`] against a [`Graph`] and produces one
//! [`ShipmentResult`] per request, in input order.
//!
//! ## Outcomes
//!
//! | Condition                          | Status           |
//! |------------------------------------|------------------|
//! | origin not in graph                | `ORIGIN_UNKNOWN` |
//! | destination unreachable or unknown | `UNREACHABLE`    |
//! | reconstructed path is empty        | `UNREACHABLE`    |
//! | otherwise                          | `RESOLVED`       |
//!
//! None of these abort the batch. Every request is resolved independently
//! from a fresh Dijkstra run; nothing is cached between requests.
//!
//! ## Observers
//!
//! Each `RESOLVED` result is handed to a [`RouteObserver`] together with
//! the graph it was computed over, so a presentation layer can render it.

use serde::{Deserialize, Serialize};

use shipnet_core::{NodeId, ShipmentId, ShipmentRequest};

use crate::dijkstra::shortest_paths;
use crate::graph::Graph;
use crate::path::reconstruct;

// ---------------------------------------------------------------------------
// ShipmentStatus
// ---------------------------------------------------------------------------

/// Outcome category of a single shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    /// A shortest route was found.
    Resolved,
    /// The origin is not part of the network.
    OriginUnknown,
    /// No route leads from the origin to the destination.
    Unreachable,
}

impl ShipmentStatus {
    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "RESOLVED",
            Self::OriginUnknown => "ORIGIN_UNKNOWN",
            Self::Unreachable => "UNREACHABLE",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a distance the way reports print it: whole values keep a
/// trailing `.0` (`8.0`, not `8`), others use the shortest exact form.
pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() && distance.fract() == 0.0 && distance.abs() < 1e16 {
        format!("{distance:.1}")
    } else {
        format!("{distance}")
    }
}

// ---------------------------------------------------------------------------
// ShipmentResult
// ---------------------------------------------------------------------------

/// Resolution of one shipment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentResult {
    /// Shipment identifier, copied from the request.
    pub id: ShipmentId,
    /// Requested origin.
    pub origin: NodeId,
    /// Requested destination.
    pub destination: NodeId,
    /// Outcome category.
    pub status: ShipmentStatus,
    /// Total route distance. Present only when resolved.
    pub distance: Option<f64>,
    /// Node sequence from origin to destination. Present only when resolved.
    pub path: Option<Vec<NodeId>>,
    /// Human-readable summary.
    pub message: String,
}

impl ShipmentResult {
    fn resolved(request: &ShipmentRequest, distance: f64, path: Vec<NodeId>) -> Self {
        let route = path
            .iter()
            .map(NodeId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ");
        let message = format!(
            "shipment {}: origin={}, destination={}, min_distance={}, route={}",
            request.id,
            request.origin,
            request.destination,
            format_distance(distance),
            route
        );
        Self {
            id: request.id.clone(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            status: ShipmentStatus::Resolved,
            distance: Some(distance),
            path: Some(path),
            message,
        }
    }

    fn unresolved(request: &ShipmentRequest, status: ShipmentStatus) -> Self {
        let suffix = match status {
            ShipmentStatus::OriginUnknown => " (unknown origin)",
            _ => "",
        };
        let message = format!(
            "shipment {}: origin={}, destination={} -> route not found{}",
            request.id, request.origin, request.destination, suffix
        );
        Self {
            id: request.id.clone(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            status,
            distance: None,
            path: None,
            message,
        }
    }

    /// Whether a route was found.
    pub fn is_resolved(&self) -> bool {
        self.status == ShipmentStatus::Resolved
    }

    /// Number of hops on the route, if resolved.
    pub fn hop_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// RouteObserver
// ---------------------------------------------------------------------------

/// Receives every resolved shipment as it is produced.
///
/// Implemented by presentation adapters (renderers, reporters). The
/// resolver calls it synchronously, in input order.
pub trait RouteObserver {
    /// Called once per `RESOLVED` result.
    fn on_resolved(&mut self, graph: &Graph, result: &ShipmentResult);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RouteObserver for NoopObserver {
    fn on_resolved(&mut self, _graph: &Graph, _result: &ShipmentResult) {}
}

// ---------------------------------------------------------------------------
// BatchSummary
// ---------------------------------------------------------------------------

/// Per-status counts over a batch of results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of results.
    pub total: usize,
    /// Results with a route.
    pub resolved: usize,
    /// Results whose origin was not in the network.
    pub origin_unknown: usize,
    /// Results with no route to the destination.
    pub unreachable: usize,
}

impl BatchSummary {
    /// Count statuses in `results`.
    pub fn from_results(results: &[ShipmentResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            match r.status {
                ShipmentStatus::Resolved => acc.resolved += 1,
                ShipmentStatus::OriginUnknown => acc.origin_unknown += 1,
                ShipmentStatus::Unreachable => acc.unreachable += 1,
            }
            acc
        })
    }
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} shipments: {} resolved, {} unknown origin, {} unreachable",
            self.total, self.resolved, self.origin_unknown, self.unreachable
        )
    }
}

// ---------------------------------------------------------------------------
// ShipmentResolver
// ---------------------------------------------------------------------------

/// Resolves shipment requests against a borrowed, read-only graph.
#[derive(Debug, Clone, Copy)]
pub struct ShipmentResolver<'g> {
    graph: &'g Graph,
}

impl<'g> ShipmentResolver<'g> {
    /// Create a resolver over `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Resolve a single request.
    pub fn resolve_one(&self, request: &ShipmentRequest) -> ShipmentResult {
        if !self.graph.contains(&request.origin) {
            tracing::warn!(
                shipment = %request.id,
                origin = %request.origin,
                "shipment origin is not in the network"
            );
            return ShipmentResult::unresolved(request, ShipmentStatus::OriginUnknown);
        }

        let paths = shortest_paths(self.graph, &request.origin);
        let Some(distance) = paths.distance(&request.destination) else {
            return ShipmentResult::unresolved(request, ShipmentStatus::Unreachable);
        };

        let path = reconstruct(&paths.predecessors, &request.origin, &request.destination);
        if path.is_empty() {
            tracing::warn!(
                shipment = %request.id,
                "finite distance but no predecessor chain; reporting unreachable"
            );
            return ShipmentResult::unresolved(request, ShipmentStatus::Unreachable);
        }

        ShipmentResult::resolved(request, distance, path)
    }

    /// Resolve `requests` in order, notifying `observer` of each resolved
    /// shipment.
    pub fn resolve_with(
        &self,
        requests: &[ShipmentRequest],
        observer: &mut dyn RouteObserver,
    ) -> Vec<ShipmentResult> {
        let span = tracing::info_span!("resolve_batch", shipments = requests.len());
        let _guard = span.enter();

        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            let result = self.resolve_one(request);
            tracing::debug!(
                shipment = %result.id,
                status = %result.status,
                distance = ?result.distance,
                "resolved shipment"
            );
            metrics::counter!("shipnet_shipments_total", "status" => result.status.as_str())
                .increment(1);
            if result.is_resolved() {
                observer.on_resolved(self.graph, &result);
            }
            results.push(result);
        }

        let summary = BatchSummary::from_results(&results);
        tracing::info!(summary = %summary, "batch resolved");
        results
    }

    /// Resolve `requests` in order without an observer.
    pub fn resolve(&self, requests: &[ShipmentRequest]) -> Vec<ShipmentResult> {
        self.resolve_with(requests, &mut NoopObserver)
    }
}

/// Resolve `requests` against `graph`, one result per request, input order.
pub fn resolve(graph: &Graph, requests: &[ShipmentRequest]) -> Vec<ShipmentResult> {
    ShipmentResolver::new(graph).resolve(requests)
}
