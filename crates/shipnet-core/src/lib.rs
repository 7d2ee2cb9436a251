//! # shipnet-core — Foundational Types
//!
//! Defines the type-system primitives shared by every shipnet crate:
//! validated node identifiers, shipment identifiers, the route and shipment
//! records a data source hands to the routing engine, and their validation
//! errors.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** [`NodeId`] is a validated
//!    newtype with a total order; that order is the tie-break key used by
//!    the shortest-path engine.
//!
//! 2. **Plain records at the boundary.** [`Edge`], [`ShipmentRequest`] and
//!    [`Warehouse`] are the already-materialized shapes a data source
//!    produces. The routing engine never parses or stores anything itself.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `shipnet-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod network;

// Re-export primary types for ergonomic imports.
pub use error::ValidationError;
pub use identity::{NodeId, ShipmentId};
pub use network::{Edge, ShipmentRequest, Warehouse};
