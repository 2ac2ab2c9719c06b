//! Fastest Router Selection
//!
//! Stateless baseline: always the router with the lowest observed
//! round-trip time. Useful when the caller manages affinity itself.

use tracing::trace;

use shardpin_topology::{RouterDescription, TopologySnapshot};

use super::{applies_to, fastest_of, RouterSelector};

/// Selector that always picks the fastest router, with no memory
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestRouterSelector;

impl FastestRouterSelector {
    /// Create a fastest-router selector
    pub fn new() -> Self {
        Self
    }
}

impl RouterSelector for FastestRouterSelector {
    fn select(&self, snapshot: &TopologySnapshot) -> Vec<RouterDescription> {
        if !applies_to(snapshot) {
            return snapshot.known_routers().to_vec();
        }

        match fastest_of(snapshot.known_routers()) {
            Some(fastest) => {
                trace!(
                    router = %fastest.address,
                    rtt_nanos = fastest.round_trip_nanos,
                    "Selected fastest router"
                );
                vec![fastest.clone()]
            }
            None => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "FastestRouter"
    }
}
