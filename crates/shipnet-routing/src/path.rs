//! # Path Reconstruction
//!
//! Turns a predecessor map into an explicit `[origin, …, destination]`
//! node sequence.

use shipnet_core::NodeId;

use crate::dijkstra::PredecessorMap;

/// Walk back from `destination` to `origin` through `predecessors`.
///
/// Returns the inclusive sequence `[origin, …, destination]`, or an empty
/// vector when `destination` is not in the map or its chain ends before
/// reaching `origin`. A chain longer than the map (only possible if the map
/// is malformed and cyclic) also yields an empty vector.
pub fn reconstruct(
    predecessors: &PredecessorMap,
    origin: &NodeId,
    destination: &NodeId,
) -> Vec<NodeId> {
    if !predecessors.contains_key(destination) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cursor = Some(destination);

    while let Some(node) = cursor {
        if path.len() >= predecessors.len() {
            tracing::warn!(
                origin = %origin,
                destination = %destination,
                "predecessor chain longer than map; treating as disconnected"
            );
            return Vec::new();
        }
        path.push(node.clone());
        if node == origin {
            break;
        }
        cursor = predecessors.get(node).and_then(Option::as_ref);
    }

    path.reverse();
    if path.first() == Some(origin) {
        path
    } else {
        Vec::new()
    }
}
