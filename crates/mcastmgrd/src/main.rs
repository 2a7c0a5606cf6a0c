//! mcastmgrd - static multicast route configurator daemon
//!
//! Loads one host's configuration, resolves the named interfaces
//! against the host's interface table, and installs the resulting
//! multicast route into the host's routing table.

use clap::Parser;
use mcast_host::{Ipv4RoutingTable, MulticastRouteTable};
use mcastmgrd::{resolver, HostConfig, McastMgr, McastMgrResult, RouteSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

/// Static multicast route configurator
#[derive(Parser, Debug)]
#[command(name = "mcastmgrd")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the host configuration file (YAML)
    #[arg(short, long)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    info!("--- Starting mcastmgrd ---");

    match run(&args) {
        Ok(summary) => {
            if summary.installed {
                info!(
                    "mcastmgrd finished: route installed (input={}, outputs=[{}]{})",
                    summary.input_interface.as_deref().unwrap_or("*"),
                    summary.output_interfaces.join(" "),
                    if summary.auto_discovered {
                        ", auto-discovered"
                    } else {
                        ""
                    }
                );
                if summary.forwards_nowhere() {
                    warn!("installed route has no output interfaces; it will not forward traffic");
                }
            } else {
                info!("mcastmgrd finished: configurator disabled on this host, nothing installed");
            }
            ExitCode::SUCCESS
        }
        // Abort paths have already emitted their error record.
        Err(_) => ExitCode::FAILURE,
    }
}

fn run(args: &Args) -> McastMgrResult<RouteSummary> {
    let config = HostConfig::load(&args.config)?;
    let inventory = config.build_inventory()?;
    let spec = config.route_spec()?.clone();

    resolver::log_inventory(&inventory);

    let mut table = Ipv4RoutingTable::new();
    let summary = McastMgr::new(spec).install(&inventory, &mut table)?;

    info!(
        "host '{}' routing table holds {} multicast routes",
        config.host,
        table.multicast_route_count()
    );

    Ok(summary)
}

fn init_logging(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .with_level(true)
        .init();
}
