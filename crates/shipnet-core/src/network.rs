//! # Network Records
//!
//! The materialized shapes a data source produces: directed routes,
//! shipment requests, and warehouse labels.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{NodeId, ShipmentId};

/// A directed, weighted route from `origin` to `destination`.
///
/// The weight is a distance. Non-negative weights are a precondition of the
/// shortest-path engine but are not checked here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Start of the route.
    pub origin: NodeId,
    /// End of the route.
    pub destination: NodeId,
    /// Route length.
    #[serde(alias = "weight")]
    pub distance: f64,
}

impl Edge {
    /// Build an edge from raw node names.
    pub fn new(origin: &str, destination: &str, distance: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            origin: NodeId::new(origin)?,
            destination: NodeId::new(destination)?,
            distance,
        })
    }
}

/// A request to move a shipment from `origin` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRequest {
    /// Shipment identifier.
    pub id: ShipmentId,
    /// Pick-up node.
    pub origin: NodeId,
    /// Drop-off node.
    pub destination: NodeId,
}

impl ShipmentRequest {
    /// Build a request from raw node names.
    pub fn new(
        id: impl Into<ShipmentId>,
        origin: &str,
        destination: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: id.into(),
            origin: NodeId::new(origin)?,
            destination: NodeId::new(destination)?,
        })
    }
}

/// A warehouse label for a node. Presentation only; never affects routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Row identifier.
    pub id: i64,
    /// The node this warehouse sits at.
    pub name: NodeId,
    /// City the warehouse is located in.
    pub city: String,
}
