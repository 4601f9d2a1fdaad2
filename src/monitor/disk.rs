//! Disk usage via `df -h`.

use std::time::Duration;

use crate::command::{self, CommandError};

/// Human-readable disk usage for every mounted filesystem.
pub fn disk_usage(timeout: Option<Duration>) -> Result<String, CommandError> {
    command::run("df", &["-h"], timeout)
}
