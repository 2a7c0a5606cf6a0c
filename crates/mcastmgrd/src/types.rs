//! Type definitions for mcastmgrd

use serde::{Deserialize, Serialize};
use std::fmt;

/// Satellite NIC naming convention used by fallback discovery.
///
/// When no output interfaces are configured, every interface whose name
/// starts with this prefix becomes an output candidate.
pub const SAT_NIC_PREFIX: &str = "satNic";

/// Role a named interface plays in a multicast route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceRole {
    Input,
    Output,
}

impl InterfaceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceRole::Input => "input",
            InterfaceRole::Output => "output",
        }
    }
}

impl fmt::Display for InterfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a route installation attempt.
///
/// Degraded-but-valid deployment configurations are reported here rather
/// than as errors: an inert host returns `installed: false`, and a route
/// whose fallback discovery matched nothing returns `installed: true`
/// with an empty output list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Whether a route was submitted to the routing table.
    pub installed: bool,
    /// Whether the output set came from fallback discovery.
    pub auto_discovered: bool,
    /// Resolved input interface name, if one was configured.
    pub input_interface: Option<String>,
    /// Resolved output interface names, in installation order.
    pub output_interfaces: Vec<String>,
}

impl RouteSummary {
    /// Summary for a host where the feature is disabled (empty group).
    pub fn disabled() -> Self {
        Self {
            installed: false,
            auto_discovered: false,
            input_interface: None,
            output_interfaces: Vec::new(),
        }
    }

    /// True if a route was installed but will not forward anywhere.
    pub fn forwards_nowhere(&self) -> bool {
        self.installed && self.output_interfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_role_display() {
        assert_eq!(InterfaceRole::Input.to_string(), "input");
        assert_eq!(InterfaceRole::Output.to_string(), "output");
    }

    #[test]
    fn test_disabled_summary() {
        let summary = RouteSummary::disabled();
        assert!(!summary.installed);
        assert!(!summary.auto_discovered);
        assert!(!summary.forwards_nowhere());
    }

    #[test]
    fn test_forwards_nowhere() {
        let summary = RouteSummary {
            installed: true,
            auto_discovered: true,
            input_interface: Some("satNic0".to_string()),
            output_interfaces: vec![],
        };
        assert!(summary.forwards_nowhere());

        let forwarding = RouteSummary {
            output_interfaces: vec!["satNic1".to_string()],
            ..summary
        };
        assert!(!forwarding.forwards_nowhere());
    }

    #[test]
    fn test_sat_nic_prefix() {
        assert_eq!(SAT_NIC_PREFIX, "satNic");
    }
}
