//! # Reports
//!
//! Text and JSON renderings of a resolved batch, and the plain edge
//! listing used by `shipnet graph`.
//!
//! The JSON report carries a SHA-256 digest of its `results` array. The
//! serialization is field-ordered and the resolver is deterministic, so
//! two runs over the same input print the same digest.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use shipnet_core::{NodeId, Warehouse};
use shipnet_routing::{format_distance, BatchSummary, Graph, ShipmentResult};

/// Machine-readable batch report.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// When the report was produced (UTC).
    pub generated_at: DateTime<Utc>,
    /// Per-shipment results in request order.
    pub results: &'a [ShipmentResult],
    /// Status counts.
    pub summary: BatchSummary,
    /// Lowercase hex SHA-256 of the serialized `results`.
    pub digest: String,
}

impl<'a> JsonReport<'a> {
    /// Assemble a report stamped with the current time.
    pub fn new(results: &'a [ShipmentResult], summary: BatchSummary) -> serde_json::Result<Self> {
        Ok(Self {
            generated_at: Utc::now(),
            results,
            summary,
            digest: results_digest(results)?,
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// SHA-256 over the JSON serialization of `results`, as lowercase hex.
pub fn results_digest(results: &[ShipmentResult]) -> serde_json::Result<String> {
    let bytes = serde_json::to_vec(results)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}

/// Node → city lookup built from warehouse labels.
fn city_index(warehouses: &[Warehouse]) -> BTreeMap<&NodeId, &str> {
    warehouses
        .iter()
        .map(|w| (&w.name, w.city.as_str()))
        .collect()
}

/// Human-readable batch report.
///
/// When warehouse labels are available, each resolved route is followed by
/// its city sequence; nodes without a label show their own name.
pub fn render_text(
    results: &[ShipmentResult],
    summary: &BatchSummary,
    warehouses: &[Warehouse],
) -> String {
    let cities = city_index(warehouses);
    let mut out = String::from("=== SHIPMENT RESULTS ===\n");

    for result in results {
        out.push_str(&result.message);
        out.push('\n');
        if cities.is_empty() {
            continue;
        }
        if let Some(path) = &result.path {
            let labels: Vec<&str> = path
                .iter()
                .map(|n| cities.get(n).copied().unwrap_or(n.as_str()))
                .collect();
            out.push_str(&format!("    cities: {}\n", labels.join(" -> ")));
        }
    }

    out.push_str(&format!("\n{summary}\n"));
    out
}

/// One `origin -> destination : weight` line per route.
pub fn render_graph_listing(graph: &Graph) -> String {
    let mut out = String::from("=== ROUTE NETWORK ===\n");
    for (from, to, weight) in graph.edges() {
        out.push_str(&format!("{from} -> {to} : {}\n", format_distance(weight)));
    }
    out.push_str(&format!(
        "\n{} nodes, {} routes\n",
        graph.node_count(),
        graph.edge_count()
    ));
    out
}
