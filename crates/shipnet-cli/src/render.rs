//! # Graphviz Rendering
//!
//! Emits the route network as a DOT digraph with weight labels. Routes on
//! a highlighted path are drawn red with `penwidth=3`.
//!
//! [`DotObserver`] hooks into the resolver and writes one
//! `route-{id}.dot` file per resolved shipment.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use shipnet_core::{NodeId, Warehouse};
use shipnet_routing::{format_distance, Graph, RouteObserver, ShipmentResult};

/// Rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("route map {} for shipment {shipment} was already written for another shipment", .path.display())]
    Collision { path: PathBuf, shipment: String },
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

/// Render `graph` as a DOT digraph.
///
/// Nodes with a warehouse label show their city under the node name.
/// Consecutive pairs of `highlight` mark the edges to emphasize.
pub fn to_dot(graph: &Graph, highlight: Option<&[NodeId]>, warehouses: &[Warehouse]) -> String {
    let cities: BTreeMap<&NodeId, &str> = warehouses
        .iter()
        .map(|w| (&w.name, w.city.as_str()))
        .collect();
    let on_route: BTreeSet<(&NodeId, &NodeId)> = highlight
        .unwrap_or(&[])
        .windows(2)
        .map(|hop| (&hop[0], &hop[1]))
        .collect();

    let mut out = String::from("digraph routes {\n    rankdir=LR;\n    node [shape=ellipse];\n");
    for node in graph.nodes() {
        let label = match cities.get(node) {
            Some(city) => format!("{}\\n{}", escape(node.as_str()), escape(city)),
            None => escape(node.as_str()),
        };
        out.push_str(&format!(
            "    {} [label=\"{}\"];\n",
            quote(node.as_str()),
            label
        ));
    }
    for (from, to, weight) in graph.edges() {
        let style = if on_route.contains(&(from, to)) {
            ", color=red, penwidth=3"
        } else {
            ""
        };
        out.push_str(&format!(
            "    {} -> {} [label={}{}];\n",
            quote(from.as_str()),
            quote(to.as_str()),
            quote(&format_distance(weight)),
            style
        ));
    }
    out.push_str("}\n");
    out
}

/// File name for a shipment's route map.
///
/// `[A-Za-z0-9-]` is kept as is; every other byte, `_` included, becomes
/// `_xx` (lowercase hex), so distinct ids never share a file name.
pub fn route_file_name(id: &str) -> String {
    let mut safe = String::with_capacity(id.len());
    for b in id.bytes() {
        if b.is_ascii_alphanumeric() || b == b'-' {
            safe.push(char::from(b));
        } else {
            safe.push_str(&format!("_{b:02x}"));
        }
    }
    format!("route-{safe}.dot")
}

/// Writes a DOT route map for every resolved shipment.
///
/// Write failures do not interrupt resolution; the first one is kept and
/// returned by [`DotObserver::into_result`]. Two shipments whose ids render
/// the same (numeric `1` and text `"1"`) would share a file; the second is
/// reported as [`RenderError::Collision`] instead of overwriting the first.
#[derive(Debug)]
pub struct DotObserver {
    dir: PathBuf,
    warehouses: Vec<Warehouse>,
    written: Vec<PathBuf>,
    used: BTreeSet<String>,
    error: Option<RenderError>,
}

impl DotObserver {
    /// Observer writing into `dir`, which must already exist.
    pub fn new(dir: impl Into<PathBuf>, warehouses: Vec<Warehouse>) -> Self {
        Self {
            dir: dir.into(),
            warehouses,
            written: Vec::new(),
            used: BTreeSet::new(),
            error: None,
        }
    }

    /// Files written so far, or the first write error.
    pub fn into_result(self) -> Result<Vec<PathBuf>, RenderError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }
}

impl RouteObserver for DotObserver {
    fn on_resolved(&mut self, graph: &Graph, result: &ShipmentResult) {
        if self.error.is_some() {
            return;
        }
        let name = route_file_name(&result.id.to_string());
        let path = self.dir.join(&name);
        if !self.used.insert(name) {
            tracing::warn!(shipment = %result.id, file = %path.display(), "route map name already used");
            self.error = Some(RenderError::Collision {
                path,
                shipment: result.id.to_string(),
            });
            return;
        }
        let dot = to_dot(graph, result.path.as_deref(), &self.warehouses);
        match std::fs::write(&path, dot) {
            Ok(()) => {
                tracing::debug!(shipment = %result.id, file = %path.display(), "wrote route map");
                self.written.push(path);
            }
            Err(source) => {
                tracing::warn!(shipment = %result.id, file = %path.display(), "route map write failed");
                self.error = Some(RenderError::Write { path, source });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipnet_core::{Edge, ShipmentId, ShipmentRequest};
    use shipnet_routing::ShipmentResolver;

    fn node(name: &str) -> NodeId {
        NodeId::new(name).unwrap()
    }

    fn sample() -> Graph {
        Graph::build(&[
            Edge::new("A", "B", 5.0).unwrap(),
            Edge::new("A", "C", 10.0).unwrap(),
            Edge::new("B", "C", 3.0).unwrap(),
        ])
    }

    #[test]
    fn plain_graph_has_no_highlight() {
        let dot = to_dot(&sample(), None, &[]);
        assert!(dot.starts_with("digraph routes {"));
        assert!(dot.contains("\"A\" -> \"B\" [label=\"5.0\"];"));
        assert!(dot.contains("\"C\" [label=\"C\"];"));
        assert!(!dot.contains("color=red"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn highlighted_route_is_red() {
        let route = vec![node("A"), node("B"), node("C")];
        let dot = to_dot(&sample(), Some(route.as_slice()), &[]);
        assert!(dot.contains("\"A\" -> \"B\" [label=\"5.0\", color=red, penwidth=3];"));
        assert!(dot.contains("\"B\" -> \"C\" [label=\"3.0\", color=red, penwidth=3];"));
        assert!(dot.contains("\"A\" -> \"C\" [label=\"10.0\"];"));
    }

    #[test]
    fn city_labels_and_escaping() {
        let graph = Graph::build(&[Edge::new("A", "Q\"x", 1.0).unwrap()]);
        let warehouses = vec![Warehouse {
            id: 1,
            name: node("A"),
            city: "Madrid".into(),
        }];
        let dot = to_dot(&graph, None, &warehouses);
        assert!(dot.contains("\"A\" [label=\"A\\nMadrid\"];"));
        assert!(dot.contains("\"Q\\\"x\""));
    }

    #[test]
    fn file_names_are_sanitized() {
        assert_eq!(route_file_name("7"), "route-7.dot");
        assert_eq!(route_file_name("PO-1/a b"), "route-PO-1_2fa_20b.dot");
        assert_eq!(route_file_name("é"), "route-_c3_a9.dot");
    }

    #[test]
    fn file_names_stay_distinct() {
        assert_ne!(route_file_name("PO/1"), route_file_name("PO_1"));
        assert_eq!(route_file_name("PO_1"), "route-PO_5f1.dot");
    }

    #[test]
    fn lookalike_ids_get_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph = sample();
        let mut observer = DotObserver::new(dir.path(), Vec::new());
        let requests = vec![
            ShipmentRequest::new(ShipmentId::text("PO/1").unwrap(), "A", "B").unwrap(),
            ShipmentRequest::new(ShipmentId::text("PO_1").unwrap(), "A", "C").unwrap(),
        ];
        ShipmentResolver::new(&graph).resolve_with(&requests, &mut observer);

        let written = observer.into_result().unwrap();
        assert_eq!(written.len(), 2);
        assert_ne!(written[0], written[1]);
        assert!(written.iter().all(|p| p.is_file()));
    }

    #[test]
    fn same_rendered_id_is_a_collision() {
        let dir = tempfile::tempdir().unwrap();
        let graph = sample();
        let mut observer = DotObserver::new(dir.path(), Vec::new());
        let requests = vec![
            ShipmentRequest::new(1, "A", "B").unwrap(),
            ShipmentRequest::new(ShipmentId::text("1").unwrap(), "A", "C").unwrap(),
        ];
        ShipmentResolver::new(&graph).resolve_with(&requests, &mut observer);

        match observer.into_result() {
            Err(RenderError::Collision { path, shipment }) => {
                assert_eq!(path, dir.path().join("route-1.dot"));
                assert_eq!(shipment, "1");
            }
            other => panic!("expected a collision, got {other:?}"),
        }
        let dot = std::fs::read_to_string(dir.path().join("route-1.dot")).unwrap();
        assert!(dot.contains("\"A\" -> \"B\" [label=\"5.0\", color=red, penwidth=3];"));
    }

    #[test]
    fn observer_writes_one_file_per_resolved_shipment() {
        let dir = tempfile::tempdir().unwrap();
        let graph = sample();
        let mut observer = DotObserver::new(dir.path(), Vec::new());
        let requests = vec![
            ShipmentRequest::new(1, "A", "C").unwrap(),
            ShipmentRequest::new(2, "C", "A").unwrap(),
        ];
        ShipmentResolver::new(&graph).resolve_with(&requests, &mut observer);

        let written = observer.into_result().unwrap();
        assert_eq!(written, vec![dir.path().join("route-1.dot")]);
        let dot = std::fs::read_to_string(&written[0]).unwrap();
        assert!(dot.contains("\"B\" -> \"C\" [label=\"3.0\", color=red, penwidth=3];"));
    }

    #[test]
    fn observer_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let graph = sample();
        let mut observer = DotObserver::new(&missing, Vec::new());
        ShipmentResolver::new(&graph)
            .resolve_with(&[ShipmentRequest::new(1, "A", "B").unwrap()], &mut observer);
        assert!(matches!(
            observer.into_result(),
            Err(RenderError::Write { .. })
        ));
    }
}
