//! Router descriptions
//!
//! One observation of a usable routing node. Descriptions are produced by
//! the topology monitor; selection only reads them.

use serde::{Deserialize, Serialize};

use crate::address::RouterAddress;

/// Point-in-time observation of one routing node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterDescription {
    /// Address of the router
    pub address: RouterAddress,

    /// Last measured round-trip time, lower is faster
    pub round_trip_nanos: u64,
}

impl RouterDescription {
    /// Create a description for a router with a measured round-trip time
    pub fn new(address: RouterAddress, round_trip_nanos: u64) -> Self {
        Self { address, round_trip_nanos }
    }
}
