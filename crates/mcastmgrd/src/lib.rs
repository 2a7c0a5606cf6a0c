//! Static multicast route configurator daemon
//!
//! Installs one static IPv4 multicast forwarding entry per host at
//! setup time: the configured group/origin pair, one optional input
//! interface, and N output interfaces. When no output interfaces are
//! named, candidates are discovered by the satellite-NIC naming
//! convention. There is no dynamic multicast routing (PIM, IGMP
//! snooping) here; the configurator runs once and exits.

mod config;
mod error;
pub mod resolver;
mod route_mgr;
mod types;

pub use config::{HostConfig, RouteSpec};
pub use error::{McastMgrError, McastMgrResult};
pub use route_mgr::McastMgr;
pub use types::{InterfaceRole, RouteSummary, SAT_NIC_PREFIX};
