//! Common network value types for the multicast configurator.
//!
//! This crate provides type-safe representations of the network
//! primitives used by the route installer:
//!
//! - [`Ipv4Address`]: IPv4 addresses with multicast-range helpers

mod ip;

pub use ip::Ipv4Address;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IPv4 address format: {0}")]
    InvalidIpAddress(String),
}
