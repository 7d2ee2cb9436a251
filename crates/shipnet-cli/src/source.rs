//! # File-Backed Network Source
//!
//! Loads warehouses, routes, and shipments from a single JSON or YAML
//! document and serves them through [`NetworkSource`].
//!
//! ```yaml
//! warehouses:
//!   - { id: 1, name: A, city: Madrid }
//! routes:
//!   - { origin: A, destination: B, distance: 5.0 }
//! shipments:
//!   - { id: 1, origin: A, destination: D }
//! ```
//!
//! The format is chosen from the file extension (`.json`, `.yaml`, `.yml`).
//! All three sections are optional in the document; a missing `routes`
//! section is caught later as an empty network.

use std::path::Path;

use serde::{Deserialize, Serialize};

use shipnet_core::{Edge, ShipmentRequest, Warehouse};
use shipnet_routing::{NetworkSource, SourceError};

/// Serialization format of a network document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON.
    Json,
    /// YAML.
    Yaml,
}

impl DocumentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            other => Err(SourceError::UnsupportedFormat(format!(
                "{} (extension {:?}; expected .json, .yaml or .yml)",
                path.display(),
                other.unwrap_or("")
            ))),
        }
    }
}

/// On-disk layout of a network document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkDocument {
    /// Warehouse labels (presentation only).
    #[serde(default)]
    pub warehouses: Vec<Warehouse>,
    /// Directed routes.
    #[serde(default)]
    pub routes: Vec<Edge>,
    /// Shipment requests.
    #[serde(default)]
    pub shipments: Vec<ShipmentRequest>,
}

/// Reference network: four warehouses, five one-way routes, three
/// shipments (one of them against the direction of travel).
const DEMO_NETWORK: &str = r#"
warehouses:
  - { id: 1, name: A, city: Madrid }
  - { id: 2, name: B, city: Barcelona }
  - { id: 3, name: C, city: Valencia }
  - { id: 4, name: D, city: Sevilla }
routes:
  - { origin: A, destination: B, distance: 5.0 }
  - { origin: A, destination: C, distance: 10.0 }
  - { origin: B, destination: C, distance: 3.0 }
  - { origin: C, destination: D, distance: 1.5 }
  - { origin: B, destination: D, distance: 9.0 }
shipments:
  - { id: 1, origin: A, destination: D }
  - { id: 2, origin: B, destination: A }
  - { id: 3, origin: A, destination: C }
"#;

/// A network source backed by a parsed document.
///
/// The document is read and decoded once, eagerly, so I/O and parse
/// failures surface before any routing happens.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSource {
    location: String,
    document: NetworkDocument,
}

impl FileSource {
    /// Read and parse the document at `path`.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let format = DocumentFormat::from_path(path)?;
        let location = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            location: location.clone(),
            source,
        })?;
        let source = Self::parse(&location, format, &text)?;
        tracing::info!(
            location = %source.location,
            routes = source.document.routes.len(),
            shipments = source.document.shipments.len(),
            warehouses = source.document.warehouses.len(),
            "loaded network document"
        );
        Ok(source)
    }

    /// Parse document text in the given format.
    pub fn parse(location: &str, format: DocumentFormat, text: &str) -> Result<Self, SourceError> {
        let parsed: Result<NetworkDocument, String> = match format {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        };
        let document = parsed.map_err(|reason| SourceError::Parse {
            location: location.to_string(),
            reason,
        })?;
        Ok(Self::from_document(location, document))
    }

    /// Wrap an already-built document.
    pub fn from_document(location: impl Into<String>, document: NetworkDocument) -> Self {
        Self {
            location: location.into(),
            document,
        }
    }

    /// The built-in reference network.
    pub fn demo() -> Result<Self, SourceError> {
        Self::parse("<demo>", DocumentFormat::Yaml, DEMO_NETWORK)
    }

    /// Where the document came from.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Warehouse labels declared by the document.
    pub fn warehouses(&self) -> &[Warehouse] {
        &self.document.warehouses
    }
}

impl NetworkSource for FileSource {
    fn edges(&self) -> Result<Vec<Edge>, SourceError> {
        Ok(self.document.routes.clone())
    }

    fn shipments(&self) -> Result<Vec<ShipmentRequest>, SourceError> {
        Ok(self.document.shipments.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipnet_core::ShipmentId;

    #[test]
    fn demo_network_parses() {
        let source = FileSource::demo().unwrap();
        assert_eq!(source.warehouses().len(), 4);
        assert_eq!(source.edges().unwrap().len(), 5);
        let shipments = source.shipments().unwrap();
        assert_eq!(shipments.len(), 3);
        assert_eq!(shipments[1].id, ShipmentId::Numeric(2));
        assert_eq!(source.warehouses()[0].city, "Madrid");
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("n.json")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("n.YML")).unwrap(),
            DocumentFormat::Yaml
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("n.csv")),
            Err(SourceError::UnsupportedFormat(_))
        ));
        assert!(DocumentFormat::from_path(Path::new("network")).is_err());
    }

    #[test]
    fn json_document_with_string_ids() {
        let text = r#"{
            "routes": [{"origin": "X", "destination": "Y", "distance": 2}],
            "shipments": [{"id": "PO-1", "origin": "X", "destination": "Y"}]
        }"#;
        let source = FileSource::parse("inline", DocumentFormat::Json, text).unwrap();
        assert!(source.warehouses().is_empty());
        assert_eq!(source.edges().unwrap()[0].distance, 2.0);
        assert_eq!(
            source.shipments().unwrap()[0].id,
            ShipmentId::Text("PO-1".into())
        );
    }

    #[test]
    fn blank_node_name_is_a_parse_error() {
        let text = "routes:\n  - { origin: '', destination: B, distance: 1 }\n";
        let err = FileSource::parse("inline", DocumentFormat::Yaml, text).unwrap_err();
        match err {
            SourceError::Parse { location, reason } => {
                assert_eq!(location, "inline");
                assert!(reason.contains("invalid node identifier"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_shipment_id_is_a_parse_error() {
        let text = r#"{"routes": [], "shipments": [{"id": "", "origin": "A", "destination": "B"}]}"#;
        let err = FileSource::parse("inline", DocumentFormat::Json, text).unwrap_err();
        match err {
            SourceError::Parse { reason, .. } => {
                assert!(reason.contains("invalid shipment identifier"), "{reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_section_is_rejected() {
        let text = "routes: []\nparcels: []\n";
        assert!(FileSource::parse("inline", DocumentFormat::Yaml, text).is_err());
    }

    #[test]
    fn open_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("net.yaml");
        std::fs::write(&path, "routes:\n  - { origin: A, destination: B, distance: 1 }\n")
            .unwrap();
        let source = FileSource::open(&path).unwrap();
        assert_eq!(source.location(), path.display().to_string());
        assert_eq!(source.edges().unwrap().len(), 1);
        assert!(source.shipments().unwrap().is_empty());
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let err = FileSource::open(Path::new("/nonexistent/net.json")).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }
}
