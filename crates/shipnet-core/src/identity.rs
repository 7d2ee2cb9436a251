//! # Identity Newtypes
//!
//! Identifiers for the two namespaces in a routing run: network nodes and
//! shipments. You cannot pass a [`ShipmentId`] where a [`NodeId`] is
//! expected.
//!
//! ## Ordering
//!
//! [`NodeId`] orders by its string value. The shortest-path engine uses
//! this order as the secondary key of its priority queue, so the order is
//! part of the determinism contract and must not change.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// A named location in the routing network (warehouse, hub, city).
///
/// The identifier is opaque and stored verbatim. The only constraint is
/// that it contains at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Create a node identifier, rejecting empty or whitespace-only names.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidNodeId(name));
        }
        Ok(Self(name))
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NodeId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NodeId {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ShipmentId
// ---------------------------------------------------------------------------

/// Identifier of a shipment request.
///
/// Data sources hand out either integer keys (database rows) or string
/// references (external order numbers); both are accepted and rendered
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawShipmentId", into = "RawShipmentId")]
pub enum ShipmentId {
    /// Integer key.
    Numeric(i64),
    /// Free-form string reference.
    Text(String),
}

impl ShipmentId {
    /// Create a string shipment identifier, rejecting the empty string.
    pub fn text(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::InvalidShipmentId);
        }
        Ok(Self::Text(value))
    }
}

/// Wire shape of a [`ShipmentId`]: a bare integer or string, unvalidated.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawShipmentId {
    Numeric(i64),
    Text(String),
}

impl TryFrom<RawShipmentId> for ShipmentId {
    type Error = ValidationError;

    fn try_from(raw: RawShipmentId) -> Result<Self, Self::Error> {
        match raw {
            RawShipmentId::Numeric(n) => Ok(Self::Numeric(n)),
            RawShipmentId::Text(s) => Self::text(s),
        }
    }
}

impl From<ShipmentId> for RawShipmentId {
    fn from(id: ShipmentId) -> Self {
        match id {
            ShipmentId::Numeric(n) => Self::Numeric(n),
            ShipmentId::Text(s) => Self::Text(s),
        }
    }
}

impl From<i64> for ShipmentId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl std::fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
