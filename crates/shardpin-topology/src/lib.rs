//! Shardpin Topology - Cluster Topology Value Types
//!
//! Immutable observations of a sharded deployment, produced by the owning
//! client's topology monitor and consumed by the selection strategies in
//! `shardpin-selection`.
//!
//! A `TopologySnapshot` is a point-in-time view: the deployment mode and
//! kind, plus the routers the monitor currently considers usable. Presence
//! of a `RouterDescription` in a snapshot is what "usable" means; this crate
//! performs no health checking of its own.

pub mod address;
pub mod description;
pub mod snapshot;

pub use address::{AddressParseError, RouterAddress};
pub use description::RouterDescription;
pub use snapshot::{ClusterKind, ClusterMode, TopologySnapshot};
