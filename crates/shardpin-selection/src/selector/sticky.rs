//! Sticky Router Selection
//!
//! Pins the fastest router in a sharded deployment and keeps routing to it
//! for as long as it stays reachable. The pin is re-evaluated only when the
//! topology changes in a way that invalidates it: the pinned router
//! disappears, or routers show up that were not considered when the pin was
//! taken. A merely-faster newcomer alone never unseats a healthy pin.

use std::collections::HashSet;
use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, trace};

use shardpin_topology::{RouterAddress, RouterDescription, TopologySnapshot};

use super::{applies_to, fastest_of, RouterSelector};

/// Private pin memory, mutated only under the selector's mutex
#[derive(Debug, Default)]
struct PinState {
    /// Currently pinned router, None when no pin is active
    pinned: Option<RouterAddress>,

    /// Healthy addresses observed when the pin was last (re)established.
    /// Cleared exactly when `pinned` is cleared.
    considered: HashSet<RouterAddress>,
}

/// Router selector that sticks to the fastest router while it stays reachable
#[derive(Debug, Default)]
pub struct StickyRouterSelector {
    state: Mutex<PinState>,
}

impl StickyRouterSelector {
    /// Create an unpinned selector
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently pinned address, for diagnostics
    pub fn pinned(&self) -> Option<RouterAddress> {
        self.state.lock().pinned.clone()
    }
}

impl RouterSelector for StickyRouterSelector {
    fn select(&self, snapshot: &TopologySnapshot) -> Vec<RouterDescription> {
        // Stickiness is meaningless outside sharded/multiple deployments;
        // defer entirely to the snapshot. No shared state touched.
        if !applies_to(snapshot) {
            return snapshot.known_routers().to_vec();
        }

        let healthy: HashSet<RouterAddress> = snapshot
            .known_routers()
            .iter()
            .map(|r| r.address.clone())
            .collect();

        let mut state = self.state.lock();

        let pin_healthy = state
            .pinned
            .as_ref()
            .is_some_and(|addr| healthy.contains(addr));

        // Stale when a healthy router exists that the current pin never
        // competed against, or when the pin itself is missing or gone.
        if !healthy.is_subset(&state.considered) || !pin_healthy {
            if state.pinned.is_some() && !pin_healthy {
                let gone = state.pinned.take();
                state.considered.clear();
                debug!(router = ?gone, "Pinned router left the healthy set, resetting");
            }

            if let Some(fastest) = fastest_of(snapshot.known_routers()) {
                debug!(
                    router = %fastest.address,
                    rtt_nanos = fastest.round_trip_nanos,
                    "Pinning fastest router"
                );
                state.pinned = Some(fastest.address.clone());
                // The set observed at this decision point, not a union with
                // whatever was considered before.
                state.considered = healthy;
            }
        } else {
            trace!(router = ?state.pinned, "Keeping pinned router");
        }

        match &state.pinned {
            // Lookup returning nothing means the router is gone; an empty
            // result, not a fault.
            Some(addr) => snapshot.by_address(addr),
            None => Vec::new(),
        }
    }

    fn name(&self) -> &'static str {
        "StickyRouter"
    }
}

impl fmt::Display for StickyRouterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state.lock().pinned {
            Some(addr) => write!(f, "StickyRouterSelector{{pinned={}}}", addr),
            None => write!(f, "StickyRouterSelector{{}}"),
        }
    }
}
