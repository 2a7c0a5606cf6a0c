//! Multicast route manager - resolves configured interface names and
//! installs one static multicast forwarding entry.

use crate::config::RouteSpec;
use crate::error::{McastMgrError, McastMgrResult};
use crate::resolver;
use crate::types::{InterfaceRole, RouteSummary, SAT_NIC_PREFIX};
use mcast_host::{
    InterfaceHandle, InterfaceInventory, InterfaceRef, MulticastRoute, MulticastRouteTable,
};
use mcast_types::Ipv4Address;
use tracing::{error, info, instrument, warn};

/// Multicast route manager
///
/// Holds one host's parsed route specification and installs the
/// corresponding `(*,G)` or `(S,G)` entry. The interface inventory and
/// routing table are passed into [`McastMgr::install`] per call; the
/// manager keeps no references to host state between invocations.
pub struct McastMgr {
    spec: RouteSpec,
}

impl McastMgr {
    /// Create a new McastMgr for one host's route spec.
    pub fn new(spec: RouteSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &RouteSpec {
        &self.spec
    }

    /// Resolves the spec against the inventory and submits the route.
    ///
    /// Runs to completion in one pass. Failure anywhere in parsing or
    /// resolution aborts the whole installation; a partially resolved
    /// route is never submitted. The route value itself is only
    /// constructed after every interface has resolved.
    #[instrument(skip(self, inventory, table))]
    pub fn install(
        &self,
        inventory: &dyn InterfaceInventory,
        table: &mut dyn MulticastRouteTable,
    ) -> McastMgrResult<RouteSummary> {
        if self.spec.is_disabled() {
            warn!("group address is empty; not installing any multicast route");
            return Ok(RouteSummary::disabled());
        }

        let group = self.parse_group()?;
        let origin = parse_address("origin", &self.spec.origin)?;
        let origin_mask = parse_address("origin_mask", &self.spec.origin_mask)?;

        info!(
            "installing multicast route: origin={} origin_mask={} group={} in_interface='{}' out_interfaces='{}'",
            origin, origin_mask, group, self.spec.in_interface, self.spec.out_interfaces
        );

        let input = self.resolve_input(inventory)?;
        let (outputs, auto_discovered) = self.resolve_outputs(inventory, input)?;

        let summary = RouteSummary {
            installed: true,
            auto_discovered,
            input_interface: input.map(|handle| handle.name.clone()),
            output_interfaces: outputs.iter().map(|r| r.name.clone()).collect(),
        };

        let route = MulticastRoute::new(
            origin,
            origin_mask,
            group,
            input.map(InterfaceRef::from),
            outputs,
        );

        table.submit_multicast_route(route);
        info!(
            "multicast route installed; routing table now has {} multicast routes",
            table.multicast_route_count()
        );

        Ok(summary)
    }

    /// Parses the group address and checks it is actually multicast.
    fn parse_group(&self) -> McastMgrResult<Ipv4Address> {
        let group = parse_address("group", &self.spec.group)?;
        if !group.is_multicast() {
            error!(
                "group address '{}' is outside the multicast range; aborting route installation",
                self.spec.group
            );
            return Err(McastMgrError::invalid_address("group", &self.spec.group));
        }
        Ok(group)
    }

    /// Resolves the input interface, or None for wildcard input.
    fn resolve_input<'a>(
        &self,
        inventory: &'a dyn InterfaceInventory,
    ) -> McastMgrResult<Option<&'a InterfaceHandle>> {
        if self.spec.in_interface.is_empty() {
            info!("no input interface specified; packets from any input interface will match");
            return Ok(None);
        }

        match resolver::find_by_name(inventory, &self.spec.in_interface) {
            Some(handle) => {
                info!("using input interface: {}", handle);
                Ok(Some(handle))
            }
            None => {
                error!(
                    "input interface '{}' not found; aborting route installation",
                    self.spec.in_interface
                );
                Err(McastMgrError::interface_not_found(
                    &self.spec.in_interface,
                    InterfaceRole::Input,
                ))
            }
        }
    }

    /// Resolves the output interface set.
    ///
    /// Explicitly configured names resolve all-or-nothing, in configured
    /// order. An empty list falls back to discovery by the satellite-NIC
    /// naming convention, excluding the input interface; finding nothing
    /// is a degraded outcome, not an error.
    fn resolve_outputs(
        &self,
        inventory: &dyn InterfaceInventory,
        input: Option<&InterfaceHandle>,
    ) -> McastMgrResult<(Vec<InterfaceRef>, bool)> {
        if !self.spec.out_interfaces.is_empty() {
            let mut outputs = Vec::new();
            for token in self.spec.out_interface_tokens() {
                if input.is_some_and(|handle| handle.name == token) {
                    error!(
                        "output interface '{}' is also the input interface; aborting route installation",
                        token
                    );
                    return Err(McastMgrError::role_conflict(token));
                }

                match resolver::find_by_name(inventory, token) {
                    Some(handle) => {
                        info!("added output interface: {}", handle);
                        outputs.push(InterfaceRef::from(handle));
                    }
                    None => {
                        error!(
                            "output interface '{}' not found; aborting route installation",
                            token
                        );
                        return Err(McastMgrError::interface_not_found(
                            token,
                            InterfaceRole::Output,
                        ));
                    }
                }
            }
            return Ok((outputs, false));
        }

        warn!(
            "out interface list is empty; attempting automatic discovery of '{}*' output interfaces",
            SAT_NIC_PREFIX
        );

        let mut outputs = Vec::new();
        for handle in resolver::find_by_prefix(inventory, SAT_NIC_PREFIX) {
            if input.is_some_and(|input| input.name == handle.name) {
                continue;
            }
            info!("auto-added output interface: {}", handle);
            outputs.push(InterfaceRef::from(handle));
        }

        if outputs.is_empty() {
            warn!(
                "automatic discovery found no '{}*' interfaces; route will not forward anywhere",
                SAT_NIC_PREFIX
            );
        }

        Ok((outputs, true))
    }
}

/// Parses one dotted-decimal route field.
fn parse_address(field: &'static str, value: &str) -> McastMgrResult<Ipv4Address> {
    value.parse::<Ipv4Address>().map_err(|_| {
        error!(
            "malformed {} address '{}'; aborting route installation",
            field, value
        );
        McastMgrError::invalid_address(field, value)
    })
}
