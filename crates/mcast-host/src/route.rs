//! Multicast forwarding entries and the routing-table sink contract.

use crate::InterfaceHandle;
use mcast_types::Ipv4Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned snapshot of a resolved interface, carried inside a route.
///
/// Taken from a live [`InterfaceHandle`] at submission time, so a
/// submitted route never dangles into the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRef {
    pub name: String,
    pub id: u32,
}

impl From<&InterfaceHandle> for InterfaceRef {
    fn from(handle: &InterfaceHandle) -> Self {
        Self {
            name: handle.name.clone(),
            id: handle.id,
        }
    }
}

impl fmt::Display for InterfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={})", self.name, self.id)
    }
}

/// A static IPv4 multicast forwarding entry.
///
/// Matches traffic for `group` from `origin`/`origin_mask` (both
/// `0.0.0.0` for a `(*,G)` route), arriving on `in_interface` (or any
/// interface when `None`), and forwards it out `out_interfaces`.
/// Output order is preserved for diagnostics; it carries no forwarding
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MulticastRoute {
    pub origin: Ipv4Address,
    pub origin_mask: Ipv4Address,
    pub group: Ipv4Address,
    pub in_interface: Option<InterfaceRef>,
    pub out_interfaces: Vec<InterfaceRef>,
}

impl MulticastRoute {
    /// Builds a complete route in one step.
    ///
    /// Callers resolve every interface before constructing the route;
    /// there is no partially-built state to tear down on failure.
    pub fn new(
        origin: Ipv4Address,
        origin_mask: Ipv4Address,
        group: Ipv4Address,
        in_interface: Option<InterfaceRef>,
        out_interfaces: Vec<InterfaceRef>,
    ) -> Self {
        Self {
            origin,
            origin_mask,
            group,
            in_interface,
            out_interfaces,
        }
    }

    /// Returns true for a `(*,G)` route (any-source match).
    pub fn matches_any_origin(&self) -> bool {
        self.origin.is_unspecified() && self.origin_mask.is_unspecified()
    }

    /// Returns true if the route matches but forwards nowhere.
    pub fn forwards_nowhere(&self) -> bool {
        self.out_interfaces.is_empty()
    }
}

impl fmt::Display for MulticastRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self
            .in_interface
            .as_ref()
            .map(|r| r.name.as_str())
            .unwrap_or("*");
        let outputs: Vec<&str> = self
            .out_interfaces
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        write!(
            f,
            "({}/{}, {}) in={} out=[{}]",
            self.origin,
            self.origin_mask,
            self.group,
            input,
            outputs.join(" ")
        )
    }
}

/// Sink for installed multicast routes.
///
/// `submit_multicast_route` transfers ownership; the table is the sole
/// owner of the entry from that point on. Submission is not
/// deduplicated: submitting the same route twice yields two entries.
pub trait MulticastRouteTable {
    fn submit_multicast_route(&mut self, route: MulticastRoute);

    /// Number of multicast routes currently held, for diagnostics.
    fn multicast_route_count(&self) -> usize;
}

/// In-memory IPv4 routing table holding submitted multicast entries.
#[derive(Debug, Clone, Default)]
pub struct Ipv4RoutingTable {
    multicast_routes: Vec<MulticastRoute>,
}

impl Ipv4RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn multicast_routes(&self) -> &[MulticastRoute] {
        &self.multicast_routes
    }
}

impl MulticastRouteTable for Ipv4RoutingTable {
    fn submit_multicast_route(&mut self, route: MulticastRoute) {
        self.multicast_routes.push(route);
    }

    fn multicast_route_count(&self) -> usize {
        self.multicast_routes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn star_g_route() -> MulticastRoute {
        MulticastRoute::new(
            Ipv4Address::UNSPECIFIED,
            Ipv4Address::UNSPECIFIED,
            "239.1.1.1".parse().unwrap(),
            Some(InterfaceRef {
                name: "satNic0".to_string(),
                id: 100,
            }),
            vec![InterfaceRef {
                name: "satNic1".to_string(),
                id: 101,
            }],
        )
    }

    #[test]
    fn test_star_g_predicates() {
        let route = star_g_route();
        assert!(route.matches_any_origin());
        assert!(!route.forwards_nowhere());
    }

    #[test]
    fn test_s_g_route() {
        let route = MulticastRoute::new(
            "10.0.0.1".parse().unwrap(),
            "255.255.255.255".parse().unwrap(),
            "239.1.1.1".parse().unwrap(),
            None,
            vec![],
        );
        assert!(!route.matches_any_origin());
        assert!(route.forwards_nowhere());
    }

    #[test]
    fn test_interface_ref_snapshot() {
        let handle = InterfaceHandle::new("satNic2", 42);
        let r = InterfaceRef::from(&handle);
        assert_eq!(r.name, "satNic2");
        assert_eq!(r.id, 42);
    }

    #[test]
    fn test_submit_transfers_ownership() {
        let mut table = Ipv4RoutingTable::new();
        assert_eq!(table.multicast_route_count(), 0);

        table.submit_multicast_route(star_g_route());
        assert_eq!(table.multicast_route_count(), 1);
        assert_eq!(
            table.multicast_routes()[0].group,
            "239.1.1.1".parse().unwrap()
        );
    }

    #[test]
    fn test_submit_does_not_dedup() {
        let mut table = Ipv4RoutingTable::new();
        table.submit_multicast_route(star_g_route());
        table.submit_multicast_route(star_g_route());
        assert_eq!(table.multicast_route_count(), 2);
    }

    #[test]
    fn test_display() {
        let route = star_g_route();
        assert_eq!(
            route.to_string(),
            "(0.0.0.0/0.0.0.0, 239.1.1.1) in=satNic0 out=[satNic1]"
        );

        let wildcard = MulticastRoute::new(
            Ipv4Address::UNSPECIFIED,
            Ipv4Address::UNSPECIFIED,
            "239.1.1.1".parse().unwrap(),
            None,
            vec![],
        );
        assert_eq!(wildcard.to_string(), "(0.0.0.0/0.0.0.0, 239.1.1.1) in=* out=[]");
    }
}
