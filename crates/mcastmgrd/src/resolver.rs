//! Interface name resolution against a host's inventory.
//!
//! Pure read-only queries; no inventory mutation ever happens here.

use mcast_host::{InterfaceHandle, InterfaceInventory};
use tracing::{debug, info};

/// Exact, case-sensitive lookup by name.
///
/// First match in enumeration order wins if the inventory's name
/// uniqueness assumption is violated.
pub fn find_by_name<'a>(
    inventory: &'a dyn InterfaceInventory,
    name: &str,
) -> Option<&'a InterfaceHandle> {
    let found = inventory.find_by_name(name);
    match found {
        Some(handle) => debug!("resolved interface '{}' to id {}", name, handle.id),
        None => debug!("interface '{}' not present in inventory", name),
    }
    found
}

/// Lazily enumerates every interface whose name starts with `prefix`,
/// in inventory order. Finite; restartable by calling again.
pub fn find_by_prefix<'a>(
    inventory: &'a dyn InterfaceInventory,
    prefix: &'a str,
) -> impl Iterator<Item = &'a InterfaceHandle> + 'a {
    (0..inventory.count())
        .filter_map(move |i| inventory.get(i))
        .filter(move |handle| handle.name.starts_with(prefix))
}

/// Dumps the inventory at info level. Helpful for matching configured
/// names against what the host actually has.
pub fn log_inventory(inventory: &dyn InterfaceInventory) {
    info!("interface inventory has {} interfaces:", inventory.count());
    for i in 0..inventory.count() {
        if let Some(handle) = inventory.get(i) {
            info!(
                "  if[{}]: name={} id={} is_up={}",
                i, handle.name, handle.id, handle.is_up
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcast_host::InterfaceTable;
    use pretty_assertions::assert_eq;

    fn sat_host() -> InterfaceTable {
        [
            InterfaceHandle::new("satNic0", 100),
            InterfaceHandle::new("eth0", 101),
            InterfaceHandle::new("satNic1", 102),
            InterfaceHandle::new("satNic2", 103),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_find_by_name() {
        let inventory = sat_host();
        assert_eq!(find_by_name(&inventory, "eth0").unwrap().id, 101);
        assert!(find_by_name(&inventory, "satNic3").is_none());
        assert!(find_by_name(&inventory, "SATNIC0").is_none());
    }

    #[test]
    fn test_find_by_prefix_in_inventory_order() {
        let inventory = sat_host();
        let names: Vec<&str> = find_by_prefix(&inventory, "satNic")
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["satNic0", "satNic1", "satNic2"]);
    }

    #[test]
    fn test_find_by_prefix_no_match() {
        let inventory = sat_host();
        assert_eq!(find_by_prefix(&inventory, "wlan").count(), 0);
    }

    #[test]
    fn test_find_by_prefix_is_restartable() {
        let inventory = sat_host();
        let first: Vec<u32> = find_by_prefix(&inventory, "satNic").map(|h| h.id).collect();
        let second: Vec<u32> = find_by_prefix(&inventory, "satNic").map(|h| h.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_prefix_matches_all() {
        let inventory = sat_host();
        assert_eq!(find_by_prefix(&inventory, "").count(), inventory.count());
    }

    #[test]
    fn test_prefix_is_not_substring_match() {
        let inventory = sat_host();
        // "Nic" appears inside "satNic0" but no name starts with it.
        assert_eq!(find_by_prefix(&inventory, "Nic").count(), 0);
    }
}
