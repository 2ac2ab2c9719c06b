//! Shardpin Selection - Router Selection Module
//!
//! Decides which routing node a client operation should use when a sharded
//! deployment is reachable through more than one router.
//!
//! # Architecture
//!
//! ```text
//! TopologySnapshot (from the topology monitor)
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │     RouterSelector      │  Strategy seam
//! │   (Which router?)       │
//! └───────────┬─────────────┘
//!             │
//!      ┌──────┴───────────────┐
//!      ▼                      ▼
//! StickyRouterSelector   FastestRouterSelector
//! (pin while reachable)  (stateless baseline)
//! ```
//!
//! # Selection Strategies
//!
//! - **StickyRouterSelector**: pins the fastest router and keeps routing to
//!   it for as long as it stays reachable; switching routers on every
//!   operation would defeat connection reuse and cursor affinity.
//! - **FastestRouterSelector**: always the router with the lowest observed
//!   round-trip time, no memory between calls.
//!
//! # Example
//!
//! ```rust,ignore
//! use shardpin_selection::{RouterSelector, StickyRouterSelector};
//!
//! let selector = StickyRouterSelector::new();
//!
//! // Same snapshot, same answer; the pin survives faster newcomers
//! let chosen = selector.select(&snapshot);
//! ```

mod selector;

pub use selector::{FastestRouterSelector, RouterSelector, StickyRouterSelector};
