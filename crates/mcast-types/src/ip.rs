//! IPv4 address type with safe parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address wrapper with multicast-specific utilities.
///
/// Route origins and origin masks use `0.0.0.0` ("unspecified") to mean
/// "any source"; multicast groups must fall inside `224.0.0.0/4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ipv4Address(Ipv4Addr);

impl Ipv4Address {
    pub const UNSPECIFIED: Self = Ipv4Address(Ipv4Addr::UNSPECIFIED);

    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4Address(Ipv4Addr::new(a, b, c, d))
    }

    pub const fn inner(&self) -> Ipv4Addr {
        self.0
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.0.octets()
    }

    /// Returns true if this address is in the multicast range (224.0.0.0/4).
    pub const fn is_multicast(&self) -> bool {
        self.0.is_multicast()
    }

    /// Returns true if this is the unspecified address (0.0.0.0).
    pub const fn is_unspecified(&self) -> bool {
        self.0.is_unspecified()
    }

    /// Applies `mask` to this address, yielding the origin network.
    pub fn masked(&self, mask: Ipv4Address) -> Ipv4Address {
        let a = u32::from(self.0) & u32::from(mask.0);
        Ipv4Address(Ipv4Addr::from(a))
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Ipv4Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv4Addr>()
            .map(Ipv4Address)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(addr)
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        addr.0
    }
}
