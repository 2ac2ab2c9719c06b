//! Router addresses
//!
//! A `RouterAddress` identifies one routing node by host and port. Equality
//! and hashing are by value; two addresses are the same router regardless of
//! which connection (if any) currently reaches it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default router port when an address string omits one
pub const DEFAULT_PORT: u16 = 27017;

/// Errors from parsing a router address string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    /// The host part is empty
    #[error("Address has an empty host: {0:?}")]
    EmptyHost(String),

    /// The port part is not a valid u16
    #[error("Invalid port in address: {0:?}")]
    InvalidPort(String),
}

/// Network address of a routing node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouterAddress {
    /// Hostname or IP literal
    pub host: String,

    /// TCP port
    pub port: u16,
}

impl RouterAddress {
    /// Create an address from host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }
}

impl fmt::Display for RouterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for RouterAddress {
    type Err = AddressParseError;

    /// Parse `host:port`; a bare `host` gets the default port
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse()
                    .map_err(|_| AddressParseError::InvalidPort(s.to_string()))?;
                (host, port)
            }
            None => (s, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(AddressParseError::EmptyHost(s.to_string()));
        }

        Ok(Self::new(host, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_and_port() {
        let addr: RouterAddress = "router-1.internal:27018".parse().unwrap();
        assert_eq!(addr.host, "router-1.internal");
        assert_eq!(addr.port, 27018);
    }

    #[test]
    fn test_parse_bare_host_uses_default_port() {
        let addr: RouterAddress = "localhost".parse().unwrap();
        assert_eq!(addr.port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        let result: Result<RouterAddress, _> = "localhost:notaport".parse();
        assert!(matches!(result, Err(AddressParseError::InvalidPort(_))));
    }

    #[test]
    fn test_parse_rejects_empty_host() {
        let result: Result<RouterAddress, _> = ":27017".parse();
        assert!(matches!(result, Err(AddressParseError::EmptyHost(_))));
    }

    #[test]
    fn test_display_round_trips() {
        let addr = RouterAddress::new("10.0.0.5", 27017);
        assert_eq!(addr.to_string(), "10.0.0.5:27017");
        assert_eq!(addr.to_string().parse::<RouterAddress>().unwrap(), addr);
    }
}
