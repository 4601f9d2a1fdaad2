//! Log analysis: counters and per-line records derived from raw log text.

use serde::{Deserialize, Serialize};

/// Placeholder for fields that are never extracted from the raw line.
pub const UNKNOWN: &str = "Unknown";

/// One non-blank line of log text.
///
/// `timestamp` and `message` are a best-effort fixed-width slice of the raw
/// line. Nothing checks that a timestamp is actually there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogLine {
    /// First 15 characters, or [`UNKNOWN`] for shorter lines.
    pub timestamp: String,

    /// Always [`UNKNOWN`].
    pub syslog_id: String,

    /// Always [`UNKNOWN`].
    pub priority: String,

    /// Everything from character 16 on, or the whole line when shorter.
    pub message: String,
}

/// Aggregate counters plus every classified line, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAnalysis {
    pub login_attempts: u64,
    pub failed_auth_attempts: u64,
    pub system_reboots: u64,
    pub log_entries: Vec<LogLine>,
}
