//! System monitoring: disk, network and open-file snapshots.
//!
//! Each probe has its own submodule that knows which command to run and
//! what to do when it isn't available. Output is kept as text; nothing
//! beyond file names is parsed.

mod disk;
mod files;
mod network;

pub use disk::disk_usage;
pub use files::most_accessed_files;
pub use network::network_usage;

use std::time::Duration;

use tracing::info;

use crate::command::CommandError;
use crate::config::MonitorConfig;
use crate::model::SystemMonitoring;

/// A probe whose output the report can't do without.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("disk usage unavailable: {0}")]
    Disk(#[source] CommandError),

    #[error("network usage unavailable: {0}")]
    Network(#[source] CommandError),
}

/// Run every probe.
///
/// Disk and network failures abort the run; the file listing degrades to
/// a placeholder instead.
pub fn collect(
    config: &MonitorConfig,
    timeout: Option<Duration>,
) -> Result<SystemMonitoring, MonitorError> {
    let disk_usage = disk_usage(timeout).map_err(MonitorError::Disk)?;
    let network_usage = network_usage(config, timeout).map_err(MonitorError::Network)?;
    let most_accessed_files = most_accessed_files(config, timeout);

    info!(files = most_accessed_files.len(), "system monitoring collected");

    Ok(SystemMonitoring {
        disk_usage,
        network_usage,
        most_accessed_files,
    })
}
