//! # Validation Errors
//!
//! Raised when a domain primitive is built from malformed input.
//!
//! Expected per-shipment outcomes (unknown origin, unreachable destination)
//! are NOT errors; they are encoded as result statuses by the resolver.
//! Loading and configuration failures live in the crates that do the I/O.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Node identifier was empty or whitespace only.
    #[error("invalid node identifier: \"{0}\" (expected a non-empty name)")]
    InvalidNodeId(String),

    /// Shipment identifier was an empty string.
    #[error("invalid shipment identifier: must be non-empty")]
    InvalidShipmentId,
}
