//! # Data Source Seam
//!
//! The routing engine does not load anything itself. A [`NetworkSource`]
//! hands it already-materialized edges and shipment requests; adapters for
//! files, databases, or services implement the trait outside this crate.

use shipnet_core::{Edge, ShipmentRequest};

use crate::error::SourceError;

/// Supplier of the edge list and the shipment batch.
pub trait NetworkSource {
    /// Directed routes, in definition order.
    fn edges(&self) -> Result<Vec<Edge>, SourceError>;

    /// Shipment requests, in resolution order.
    fn shipments(&self) -> Result<Vec<ShipmentRequest>, SourceError>;
}

/// A source backed by in-memory vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSource {
    /// Routes returned by [`NetworkSource::edges`].
    pub edges: Vec<Edge>,
    /// Requests returned by [`NetworkSource::shipments`].
    pub shipments: Vec<ShipmentRequest>,
}

impl StaticSource {
    /// Create a source from owned vectors.
    pub fn new(edges: Vec<Edge>, shipments: Vec<ShipmentRequest>) -> Self {
        Self { edges, shipments }
    }
}

impl NetworkSource for StaticSource {
    fn edges(&self) -> Result<Vec<Edge>, SourceError> {
        Ok(self.edges.clone())
    }

    fn shipments(&self) -> Result<Vec<ShipmentRequest>, SourceError> {
        Ok(self.shipments.clone())
    }
}
