//! Interface inventory: handles and the read-only lookup contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A network interface as known to the host's inventory.
///
/// Handles are owned by the inventory; resolution hands out borrows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceHandle {
    /// Interface name, unique within a host (e.g. "satNic0", "eth0")
    pub name: String,
    /// Numeric interface id assigned by the host
    pub id: u32,
    /// Operational status
    #[serde(default = "default_up")]
    pub is_up: bool,
}

fn default_up() -> bool {
    true
}

impl InterfaceHandle {
    /// Create a new handle with the given name and id, operationally up.
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
            is_up: true,
        }
    }

    /// Create a new handle with explicit operational status.
    pub fn with_status(name: impl Into<String>, id: u32, is_up: bool) -> Self {
        Self {
            name: name.into(),
            id,
            is_up,
        }
    }
}

impl fmt::Display for InterfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (id={}, {})",
            self.name,
            self.id,
            if self.is_up { "up" } else { "down" }
        )
    }
}

/// Read-only query contract over a host's interface inventory.
///
/// Implementations enumerate interfaces in a stable order; `get` indices
/// are dense in `0..count()`.
pub trait InterfaceInventory {
    /// Number of interfaces on the host.
    fn count(&self) -> usize;

    /// Interface at enumeration position `i`, if in range.
    fn get(&self, i: usize) -> Option<&InterfaceHandle>;

    /// Exact, case-sensitive lookup by name.
    ///
    /// Name uniqueness is the inventory populator's responsibility; if
    /// that assumption is violated, the first interface in enumeration
    /// order wins.
    fn find_by_name(&self, name: &str) -> Option<&InterfaceHandle> {
        (0..self.count())
            .filter_map(|i| self.get(i))
            .find(|handle| handle.name == name)
    }
}

/// In-memory, insertion-ordered interface inventory.
#[derive(Debug, Clone, Default)]
pub struct InterfaceTable {
    interfaces: Vec<InterfaceHandle>,
}

impl InterfaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handle to the inventory.
    ///
    /// Duplicate names are accepted but logged; lookups will only ever
    /// return the first one added.
    pub fn add_interface(&mut self, handle: InterfaceHandle) {
        if self.find_by_name(&handle.name).is_some() {
            warn!(
                "duplicate interface name '{}' in inventory; lookups resolve to the first entry",
                handle.name
            );
        }
        self.interfaces.push(handle);
    }

    pub fn interfaces(&self) -> &[InterfaceHandle] {
        &self.interfaces
    }
}

impl FromIterator<InterfaceHandle> for InterfaceTable {
    fn from_iter<I: IntoIterator<Item = InterfaceHandle>>(iter: I) -> Self {
        let mut table = InterfaceTable::new();
        for handle in iter {
            table.add_interface(handle);
        }
        table
    }
}

impl InterfaceInventory for InterfaceTable {
    fn count(&self) -> usize {
        self.interfaces.len()
    }

    fn get(&self, i: usize) -> Option<&InterfaceHandle> {
        self.interfaces.get(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> InterfaceTable {
        [
            InterfaceHandle::new("satNic0", 100),
            InterfaceHandle::new("satNic1", 101),
            InterfaceHandle::with_status("eth0", 102, false),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_count_and_get() {
        let table = sample_table();
        assert_eq!(table.count(), 3);
        assert_eq!(table.get(0).unwrap().name, "satNic0");
        assert_eq!(table.get(2).unwrap().id, 102);
        assert!(table.get(3).is_none());
    }

    #[test]
    fn test_find_by_name_exact() {
        let table = sample_table();
        let handle = table.find_by_name("satNic1").unwrap();
        assert_eq!(handle.id, 101);
        assert!(handle.is_up);

        assert!(table.find_by_name("satnic1").is_none()); // case-sensitive
        assert!(table.find_by_name("satNic").is_none()); // no prefix match
        assert!(table.find_by_name("wlan0").is_none());
    }

    #[test]
    fn test_duplicate_name_first_wins() {
        let mut table = sample_table();
        table.add_interface(InterfaceHandle::new("satNic0", 999));

        assert_eq!(table.count(), 4);
        assert_eq!(table.find_by_name("satNic0").unwrap().id, 100);
    }

    #[test]
    fn test_down_interface_still_resolves() {
        let table = sample_table();
        let handle = table.find_by_name("eth0").unwrap();
        assert!(!handle.is_up);
    }

    #[test]
    fn test_display() {
        let handle = InterfaceHandle::with_status("eth0", 7, false);
        assert_eq!(handle.to_string(), "eth0 (id=7, down)");
    }
}
