//! Topology snapshots
//!
//! A `TopologySnapshot` is the monitor's point-in-time view of the
//! deployment: how the client is connected, what kind of deployment it is,
//! and which routers are currently usable. Snapshots are immutable; a new
//! observation means a new snapshot.

use serde::{Deserialize, Serialize};

use crate::address::RouterAddress;
use crate::description::RouterDescription;

/// How the client is connected to the deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterMode {
    /// Direct connection to a single node
    Single,
    /// Connected through multiple nodes
    Multiple,
}

/// What kind of deployment the monitor has observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClusterKind {
    /// Sharded cluster reached through routing nodes
    Sharded,
    /// Replica set
    ReplicaSet,
    /// Single standalone server
    Standalone,
    /// Not yet determined
    Unknown,
}

impl std::fmt::Display for ClusterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterMode::Single => write!(f, "single"),
            ClusterMode::Multiple => write!(f, "multiple"),
        }
    }
}

impl std::fmt::Display for ClusterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterKind::Sharded => write!(f, "sharded"),
            ClusterKind::ReplicaSet => write!(f, "replica-set"),
            ClusterKind::Standalone => write!(f, "standalone"),
            ClusterKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Immutable point-in-time view of the deployment topology
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    mode: ClusterMode,
    kind: ClusterKind,
    routers: Vec<RouterDescription>,
}

impl TopologySnapshot {
    /// Create a snapshot from an observed mode, kind and router list
    pub fn new(mode: ClusterMode, kind: ClusterKind, routers: Vec<RouterDescription>) -> Self {
        Self { mode, kind, routers }
    }

    /// Convenience constructor for a sharded deployment behind multiple routers
    pub fn sharded(routers: Vec<RouterDescription>) -> Self {
        Self::new(ClusterMode::Multiple, ClusterKind::Sharded, routers)
    }

    /// How the client is connected
    pub fn mode(&self) -> ClusterMode {
        self.mode
    }

    /// Observed deployment kind
    pub fn kind(&self) -> ClusterKind {
        self.kind
    }

    /// Every router currently considered usable, in the snapshot's stable order
    pub fn known_routers(&self) -> &[RouterDescription] {
        &self.routers
    }

    /// Descriptions matching an address, zero or one expected
    pub fn by_address(&self, address: &RouterAddress) -> Vec<RouterDescription> {
        self.routers
            .iter()
            .filter(|r| r.address == *address)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router(host: &str, rtt: u64) -> RouterDescription {
        RouterDescription::new(RouterAddress::new(host, 27017), rtt)
    }

    #[test]
    fn test_by_address_finds_matching_router() {
        let snapshot = TopologySnapshot::sharded(vec![router("a", 50), router("b", 30)]);

        let found = snapshot.by_address(&RouterAddress::new("b", 27017));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].round_trip_nanos, 30);
    }

    #[test]
    fn test_by_address_unknown_is_empty() {
        let snapshot = TopologySnapshot::sharded(vec![router("a", 50)]);

        assert!(snapshot.by_address(&RouterAddress::new("zzz", 27017)).is_empty());
    }

    #[test]
    fn test_known_routers_preserves_order() {
        let snapshot = TopologySnapshot::sharded(vec![router("a", 50), router("b", 30), router("c", 40)]);

        let hosts: Vec<_> = snapshot
            .known_routers()
            .iter()
            .map(|r| r.address.host.as_str())
            .collect();
        assert_eq!(hosts, ["a", "b", "c"]);
    }
}
