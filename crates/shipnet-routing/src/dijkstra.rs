//! # Shortest-Path Engine
//!
//! Single-source shortest paths over a [`Graph`] using Dijkstra's algorithm
//! with a binary heap and lazy deletion.
//!
//! ## Priority Order
//!
//! Queue entries are ordered by tentative distance (via `f64::total_cmp`),
//! then by [`NodeId`] ascending. The order is total, so two runs over the
//! same graph pop nodes in the same sequence and produce the same
//! predecessor map. A node's predecessor only changes on a strictly
//! shorter candidate, so among equal-distance routes the first one relaxed
//! in that sequence is kept.
//!
//! ## Preconditions
//!
//! Edge weights must be non-negative. This is not checked; results over
//! negative weights are undefined.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use shipnet_core::NodeId;

use crate::graph::Graph;

/// Minimal cumulative weight from the source per node.
/// Unreachable nodes map to `f64::INFINITY`.
pub type DistanceMap = BTreeMap<NodeId, f64>;

/// Node immediately before each node on a shortest path from the source.
/// `None` for the source itself and for unreached nodes.
pub type PredecessorMap = BTreeMap<NodeId, Option<NodeId>>;

/// Output of one single-source run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Distance per known node.
    pub distances: DistanceMap,
    /// Predecessor per known node.
    pub predecessors: PredecessorMap,
}

impl ShortestPaths {
    /// Finite distance to `node`, or `None` when it is unreachable or not
    /// part of the graph.
    pub fn distance(&self, node: &NodeId) -> Option<f64> {
        self.distances
            .get(node)
            .copied()
            .filter(|d| *d != f64::INFINITY)
    }

    /// Whether `node` was reached from the source.
    pub fn is_reachable(&self, node: &NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Split into the raw distance and predecessor maps.
    pub fn into_parts(self) -> (DistanceMap, PredecessorMap) {
        (self.distances, self.predecessors)
    }
}

// ---------------------------------------------------------------------------
// Internal: queue entry
// ---------------------------------------------------------------------------

/// Entry in the Dijkstra priority queue.
#[derive(Debug, Clone)]
struct QueueEntry {
    distance: f64,
    node: NodeId,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the
        // smallest distance first and, on ties, the smallest node id.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute shortest distances and predecessors from `source`.
///
/// If `source` is not in the graph every node is reported unreachable.
/// That is not an error here: detecting unknown origins is the caller's
/// job.
pub fn shortest_paths(graph: &Graph, source: &NodeId) -> ShortestPaths {
    let mut distances: DistanceMap = graph.nodes().map(|n| (n.clone(), f64::INFINITY)).collect();
    let mut predecessors: PredecessorMap = graph.nodes().map(|n| (n.clone(), None)).collect();

    if !graph.contains(source) {
        tracing::debug!(source = %source, "source not in graph; all nodes unreachable");
        return ShortestPaths {
            distances,
            predecessors,
        };
    }

    distances.insert(source.clone(), 0.0);

    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry {
        distance: 0.0,
        node: source.clone(),
    });

    let mut settled = 0usize;
    while let Some(QueueEntry { distance, node }) = heap.pop() {
        let recorded = distances.get(&node).copied().unwrap_or(f64::INFINITY);
        if distance > recorded {
            // Stale: a shorter distance was pushed after this entry.
            continue;
        }
        settled += 1;

        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = distance + weight;
            let current = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if candidate < current {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), Some(node.clone()));
                heap.push(QueueEntry {
                    distance: candidate,
                    node: neighbor.clone(),
                });
            }
        }
    }

    tracing::trace!(source = %source, settled, "dijkstra complete");

    ShortestPaths {
        distances,
        predecessors,
    }
}
