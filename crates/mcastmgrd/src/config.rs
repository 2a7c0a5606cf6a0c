//! Host configuration loading.
//!
//! A host file describes one host: its name, its interface table, and
//! the multicast route specification to install. All route fields are
//! plain strings; parsing and validation happen at installation time so
//! that an inert host (empty group) loads cleanly.

use crate::error::{McastMgrError, McastMgrResult};
use mcast_host::{InterfaceHandle, InterfaceTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Multicast route specification, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Multicast group address (e.g. "239.1.1.1"). Empty disables
    /// installation for this host.
    #[serde(default)]
    pub group: String,

    /// Origin (source) address; "0.0.0.0" matches any sender.
    #[serde(default = "any_address")]
    pub origin: String,

    /// Origin network mask; "0.0.0.0" with an unspecified origin makes
    /// this a (*,G) route.
    #[serde(default = "any_address")]
    pub origin_mask: String,

    /// Input interface name; empty matches traffic from any interface.
    #[serde(default)]
    pub in_interface: String,

    /// Whitespace-separated output interface names; empty triggers
    /// fallback discovery by the satellite-NIC naming convention.
    #[serde(default)]
    pub out_interfaces: String,
}

fn any_address() -> String {
    "0.0.0.0".to_string()
}

impl Default for RouteSpec {
    fn default() -> Self {
        Self {
            group: String::new(),
            origin: any_address(),
            origin_mask: any_address(),
            in_interface: String::new(),
            out_interfaces: String::new(),
        }
    }
}

impl RouteSpec {
    /// True when the group is empty: the configurator is inert on this
    /// host and installation is a deliberate no-op.
    pub fn is_disabled(&self) -> bool {
        self.group.is_empty()
    }

    /// Output interface names, split on whitespace, in configured order.
    pub fn out_interface_tokens(&self) -> impl Iterator<Item = &str> {
        self.out_interfaces.split_whitespace()
    }
}

/// One host's configuration: identity, interface table, route spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Host name, used only in diagnostics.
    #[serde(default)]
    pub host: String,

    /// The host's interface inventory.
    pub interfaces: Option<Vec<InterfaceHandle>>,

    /// The multicast route to install.
    pub multicast: Option<RouteSpec>,
}

impl HostConfig {
    /// Loads and parses a host configuration file.
    pub fn load(path: &Path) -> McastMgrResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| {
            error!("cannot read host configuration '{}': {}", path.display(), source);
            McastMgrError::Io {
                path: path.display().to_string(),
                source,
            }
        })?;

        let config: HostConfig = serde_yaml::from_str(&text).map_err(|e| {
            error!("cannot parse host configuration '{}': {}", path.display(), e);
            McastMgrError::config(e.to_string())
        })?;

        info!("loaded host configuration from {}", path.display());
        if let Some(spec) = &config.multicast {
            info!("  host = '{}'", config.host);
            info!("  group = '{}'", spec.group);
            info!("  origin = '{}'", spec.origin);
            info!("  origin_mask = '{}'", spec.origin_mask);
            info!("  in_interface = '{}'", spec.in_interface);
            info!("  out_interfaces = '{}'", spec.out_interfaces);
        }

        Ok(config)
    }

    /// Builds the in-memory interface table for this host.
    ///
    /// A host file without an interface table cannot resolve anything;
    /// that is a missing dependency, not an empty inventory.
    pub fn build_inventory(&self) -> McastMgrResult<InterfaceTable> {
        let interfaces = self.interfaces.as_ref().ok_or_else(|| {
            error!("host configuration declares no interface table");
            McastMgrError::missing_dependency("interface table")
        })?;

        Ok(interfaces.iter().cloned().collect())
    }

    /// The route spec section, required even on inert hosts.
    pub fn route_spec(&self) -> McastMgrResult<&RouteSpec> {
        self.multicast.as_ref().ok_or_else(|| {
            error!("host configuration declares no multicast route spec");
            McastMgrError::missing_dependency("multicast route spec")
        })
    }
}
