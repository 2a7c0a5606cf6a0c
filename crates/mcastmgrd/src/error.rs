//! Error types for mcastmgrd.
//!
//! All installation failures abort the route for the current host only;
//! callers report them and move on. Degraded-but-valid outcomes (empty
//! group, empty fallback discovery) are not errors and are carried in
//! [`crate::RouteSummary`] instead.

use crate::types::InterfaceRole;
use std::io;
use thiserror::Error;

/// Result type alias for mcastmgrd operations.
pub type McastMgrResult<T> = Result<T, McastMgrError>;

/// Errors that can occur while loading configuration or installing a route.
#[derive(Debug, Error)]
pub enum McastMgrError {
    /// Malformed group/origin/mask address text, or a group address
    /// outside the multicast range.
    #[error("invalid {field} address '{value}'")]
    InvalidAddress {
        /// The route field that failed to parse ("group", "origin", "origin_mask").
        field: &'static str,
        /// The offending text.
        value: String,
    },

    /// A named interface is absent from the host's inventory.
    #[error("{role} interface '{name}' not found in inventory")]
    InterfaceNotFound {
        /// The configured interface name.
        name: String,
        /// Whether it was named as input or output.
        role: InterfaceRole,
    },

    /// The same interface was configured as both input and output.
    #[error("interface '{name}' configured as both input and output")]
    RoleConflict {
        /// The conflicting interface name.
        name: String,
    },

    /// A host collaborator the installer cannot function without is
    /// missing from the host configuration.
    #[error("missing host dependency: {what}")]
    MissingDependency {
        /// The absent collaborator (e.g. "interface table").
        what: String,
    },

    /// Host configuration could not be parsed.
    #[error("invalid host configuration: {message}")]
    Config {
        /// Parse error detail.
        message: String,
    },

    /// Host configuration file could not be read.
    #[error("failed to read host configuration '{path}': {source}")]
    Io {
        /// The configuration file path.
        path: String,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl McastMgrError {
    /// Creates an invalid address error.
    pub fn invalid_address(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAddress {
            field,
            value: value.into(),
        }
    }

    /// Creates an interface not found error.
    pub fn interface_not_found(name: impl Into<String>, role: InterfaceRole) -> Self {
        Self::InterfaceNotFound {
            name: name.into(),
            role,
        }
    }

    /// Creates a role conflict error.
    pub fn role_conflict(name: impl Into<String>) -> Self {
        Self::RoleConflict { name: name.into() }
    }

    /// Creates a missing dependency error.
    pub fn missing_dependency(what: impl Into<String>) -> Self {
        Self::MissingDependency { what: what.into() }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_display() {
        let err = McastMgrError::invalid_address("group", "not-an-ip");
        assert_eq!(err.to_string(), "invalid group address 'not-an-ip'");
    }

    #[test]
    fn test_interface_not_found_display() {
        let err = McastMgrError::interface_not_found("satNic9", InterfaceRole::Input);
        assert_eq!(
            err.to_string(),
            "input interface 'satNic9' not found in inventory"
        );

        let err = McastMgrError::interface_not_found("eth7", InterfaceRole::Output);
        assert_eq!(
            err.to_string(),
            "output interface 'eth7' not found in inventory"
        );
    }

    #[test]
    fn test_role_conflict_display() {
        let err = McastMgrError::role_conflict("satNic0");
        assert_eq!(
            err.to_string(),
            "interface 'satNic0' configured as both input and output"
        );
    }

    #[test]
    fn test_missing_dependency_display() {
        let err = McastMgrError::missing_dependency("interface table");
        assert_eq!(err.to_string(), "missing host dependency: interface table");
    }
}
