//! Report persistence.
//!
//! The report is one pretty-printed JSON document, rewritten in full on
//! every run:
//!
//! ```text
//! {
//!     "log_analysis": { counters..., "log_entries": [...] },
//!     "system_monitoring": { "disk_usage", "network_usage", "most_accessed_files" }
//! }
//! ```

use std::{fs, io, path::Path};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::model::Report;

/// Errors that can occur while writing the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, ReportError>;

const INDENT: &[u8] = b"    ";

/// Render the report as 4-space indented JSON.
pub fn to_json(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut ser)?;
    // serde_json only ever writes valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the report to `path`, replacing whatever was there.
pub fn write(path: &Path, report: &Report) -> Result<()> {
    let json = to_json(report)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "report written");
    Ok(())
}
