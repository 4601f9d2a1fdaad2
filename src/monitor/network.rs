//! Network usage: `ip -s link`, or `netstat -i` on systems without iproute2.

use std::time::Duration;

use tracing::warn;

use crate::command::{self, CommandError};
use crate::config::MonitorConfig;

/// Per-interface traffic statistics.
///
/// Uses `ip` when it exists at the configured path. If it's missing, or
/// fails, `netstat -i` is tried.
pub fn network_usage(
    config: &MonitorConfig,
    timeout: Option<Duration>,
) -> Result<String, CommandError> {
    if config.ip_path.exists() {
        let ip = config.ip_path.to_string_lossy();
        match command::run(&ip, &["-s", "link"], timeout) {
            Ok(out) => return Ok(out),
            Err(e) => warn!(error = %e, "ip failed, falling back to netstat"),
        }
    }

    command::run("netstat", &["-i"], timeout)
}
