//! Host-state abstractions for the multicast configurator.
//!
//! A host owns two pieces of mutable network state that the route
//! installer collaborates with:
//!
//! - [`InterfaceInventory`]: the set of network interfaces present on the
//!   host, queried read-only during name resolution. [`InterfaceTable`]
//!   is the provided in-memory implementation.
//! - [`MulticastRouteTable`]: the sink that takes ownership of installed
//!   [`MulticastRoute`] entries. [`Ipv4RoutingTable`] is the provided
//!   in-memory implementation.
//!
//! Both are passed into the installer call as explicit parameters; the
//! installer never caches references to them across invocations.

mod interface;
mod route;

pub use interface::{InterfaceHandle, InterfaceInventory, InterfaceTable};
pub use route::{InterfaceRef, Ipv4RoutingTable, MulticastRoute, MulticastRouteTable};
