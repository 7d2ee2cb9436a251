//! Errors from loading a network and planning a batch.
//!
//! Per-shipment failures are not represented here; see
//! [`ShipmentStatus`](crate::ShipmentStatus).

use thiserror::Error;

/// Failure of a [`NetworkSource`](crate::NetworkSource) to produce its data.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Reading the backing store failed.
    #[error("failed to read network data from {location}: {source}")]
    Io {
        /// Where the data was being read from.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing store was read but its contents could not be decoded.
    #[error("failed to parse network data from {location}: {reason}")]
    Parse {
        /// Where the data was being read from.
        location: String,
        /// Decoder message.
        reason: String,
    },

    /// The store's format is not one this source understands.
    #[error("unsupported network format: {0}")]
    UnsupportedFormat(String),
}

/// Fatal errors that stop a batch before any shipment is resolved.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// The data source could not produce edges or shipments.
    #[error("data source error: {0}")]
    Source(#[from] SourceError),

    /// The data source produced no edges at all.
    #[error("network has no routes; refusing to resolve shipments against an empty graph")]
    EmptyNetwork,
}
