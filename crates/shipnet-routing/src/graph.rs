//! # Route Graph
//!
//! Directed weighted graph held as an adjacency map. Pure data: no
//! algorithms live here.
//!
//! ## Invariants
//!
//! - Every node named by any edge, as origin or destination, is a key,
//!   even when it has no outgoing routes.
//! - At most one entry per (origin, destination) pair. A later edge for the
//!   same pair overwrites the weight in place, keeping the neighbor's
//!   original position.
//!
//! ## Determinism
//!
//! Node keys live in a `BTreeMap` (sorted by [`NodeId`]) and neighbor lists
//! are `Vec`s in first-insertion order, so iteration never depends on hash
//! seeds.

use std::collections::BTreeMap;

use shipnet_core::{Edge, NodeId};

/// A directed, weighted route network.
///
/// Built once with [`Graph::build`] and read-only afterwards. `Graph` is
/// `Send + Sync`, so it can be shared across resolvers without locking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Adjacency list: node → [(neighbor, weight)].
    adjacency: BTreeMap<NodeId, Vec<(NodeId, f64)>>,
}

impl Graph {
    /// Build a graph from an ordered edge list.
    ///
    /// Weight signs are not validated. Negative weights are stored as
    /// given; shortest-path results over them are undefined.
    pub fn build(edges: &[Edge]) -> Self {
        let mut adjacency: BTreeMap<NodeId, Vec<(NodeId, f64)>> = BTreeMap::new();

        for edge in edges {
            adjacency.entry(edge.destination.clone()).or_default();

            let neighbors = adjacency.entry(edge.origin.clone()).or_default();
            match neighbors.iter_mut().find(|(n, _)| *n == edge.destination) {
                Some(slot) => slot.1 = edge.distance,
                None => neighbors.push((edge.destination.clone(), edge.distance)),
            }
        }

        let graph = Self { adjacency };
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            input_edges = edges.len(),
            "built route graph"
        );
        graph
    }

    /// Whether `node` appears anywhere in the network.
    pub fn contains(&self, node: &NodeId) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Outgoing routes of `node` in first-insertion order.
    ///
    /// Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: &NodeId) -> &[(NodeId, f64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the direct route `from → to`, if one exists.
    pub fn weight(&self, from: &NodeId, to: &NodeId) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| n == to)
            .map(|(_, w)| *w)
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct directed routes.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All nodes in ascending identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// All routes as `(origin, destination, weight)`, origins ascending,
    /// neighbors in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> {
        self.adjacency
            .iter()
            .flat_map(|(from, list)| list.iter().map(move |(to, w)| (from, to, *w)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str) -> NodeId {
        NodeId::new(name).unwrap()
    }

    fn edge(from: &str, to: &str, w: f64) -> Edge {
        Edge::new(from, to, w).unwrap()
    }

    #[test]
    fn sink_nodes_are_present() {
        let graph = Graph::build(&[edge("A", "B", 1.0), edge("C", "D", 2.0)]);
        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains(&node("B")));
        assert!(graph.contains(&node("D")));
        assert!(graph.neighbors(&node("B")).is_empty());
    }

    #[test]
    fn duplicate_pair_last_weight_wins() {
        let graph = Graph::build(&[
            edge("A", "B", 5.0),
            edge("A", "C", 1.0),
            edge("A", "B", 2.0),
        ]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(&node("A"), &node("B")), Some(2.0));
        // Overwrite keeps first position.
        let order: Vec<&str> = graph
            .neighbors(&node("A"))
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(order, vec!["B", "C"]);
    }

    #[test]
    fn edges_are_directed() {
        let graph = Graph::build(&[edge("A", "B", 5.0)]);
        assert_eq!(graph.weight(&node("A"), &node("B")), Some(5.0));
        assert_eq!(graph.weight(&node("B"), &node("A")), None);
    }

    #[test]
    fn negative_and_zero_weights_are_stored() {
        let graph = Graph::build(&[edge("A", "B", -1.0), edge("B", "C", 0.0)]);
        assert_eq!(graph.weight(&node("A"), &node("B")), Some(-1.0));
        assert_eq!(graph.weight(&node("B"), &node("C")), Some(0.0));
    }

    #[test]
    fn empty_edge_list_gives_empty_graph() {
        let graph = Graph::build(&[]);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let graph = Graph::build(&[edge("A", "B", 1.0)]);
        assert!(!graph.contains(&node("Z")));
        assert!(graph.neighbors(&node("Z")).is_empty());
    }

    #[test]
    fn nodes_and_edges_iterate_sorted_by_origin() {
        let graph = Graph::build(&[
            edge("C", "A", 1.0),
            edge("A", "C", 2.0),
            edge("A", "B", 3.0),
        ]);
        let nodes: Vec<&str> = graph.nodes().map(NodeId::as_str).collect();
        assert_eq!(nodes, vec!["A", "B", "C"]);

        let edges: Vec<(&str, &str, f64)> = graph
            .edges()
            .map(|(f, t, w)| (f.as_str(), t.as_str(), w))
            .collect();
        assert_eq!(
            edges,
            vec![("A", "C", 2.0), ("A", "B", 3.0), ("C", "A", 1.0)]
        );
    }

    #[test]
    fn self_loop_is_kept() {
        let graph = Graph::build(&[edge("A", "A", 4.0)]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.weight(&node("A"), &node("A")), Some(4.0));
    }
}
