//! System monitoring: raw command output captured for the report.

use serde::{Deserialize, Serialize};

/// Single entry reported when the accessed-files listing could not be produced.
pub const ACCESSED_FILES_ERROR: &str = "Error retrieving accessed files.";

/// Snapshot of disk, network and open-file state.
///
/// The text fields are stdout captured verbatim; nothing here is parsed
/// beyond pulling file names out of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMonitoring {
    /// Output of `df -h`.
    pub disk_usage: String,

    /// Output of `ip -s link` or `netstat -i`.
    pub network_usage: String,

    /// File names from `lsof -Fn` or `ls -lt`, or the single
    /// [`ACCESSED_FILES_ERROR`] entry.
    pub most_accessed_files: Vec<String>,
}
