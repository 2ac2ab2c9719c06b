//! Router selection strategies
//!
//! - `StickyRouterSelector`: pins the fastest router, keeps it while reachable
//! - `FastestRouterSelector`: stateless, always the fastest router
//!
//! Every strategy sees the same inputs: an immutable `TopologySnapshot` from
//! the topology monitor. Strategies that do not apply to the snapshot's
//! deployment (single node, or not sharded) pass the full router list
//! through and let the caller pick.

mod fastest;
mod sticky;

pub use fastest::FastestRouterSelector;
pub use sticky::StickyRouterSelector;

use shardpin_topology::{ClusterKind, ClusterMode, RouterDescription, TopologySnapshot};

/// Trait for router selection strategies
pub trait RouterSelector: Send + Sync {
    /// Select the router(s) to use for the next operation
    ///
    /// An empty result means no router is currently selectable; it is a
    /// normal outcome, not a failure.
    fn select(&self, snapshot: &TopologySnapshot) -> Vec<RouterDescription>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Whether the sticky rule applies: sharded, reached through multiple routers
fn applies_to(snapshot: &TopologySnapshot) -> bool {
    snapshot.mode() == ClusterMode::Multiple && snapshot.kind() == ClusterKind::Sharded
}

/// Fastest router by round-trip time; first in snapshot order wins ties
fn fastest_of(routers: &[RouterDescription]) -> Option<&RouterDescription> {
    routers.iter().min_by_key(|r| r.round_trip_nanos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shardpin_topology::RouterAddress;

    fn router(host: &str, rtt: u64) -> RouterDescription {
        RouterDescription::new(RouterAddress::new(host, 27017), rtt)
    }

    #[test]
    fn test_fastest_of_empty() {
        assert!(fastest_of(&[]).is_none());
    }

    #[test]
    fn test_fastest_of_ties_break_to_first() {
        let routers = vec![router("a", 30), router("b", 30), router("c", 40)];

        let fastest = fastest_of(&routers).unwrap();
        assert_eq!(fastest.address.host, "a");
    }
}
