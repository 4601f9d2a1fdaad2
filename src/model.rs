//! Core data model for sysreport.
//!
//! Everything here serializes straight into the report file, so field
//! names and order are part of the output format.

mod log;
mod monitoring;
mod report;

pub use log::{LogAnalysis, LogLine, UNKNOWN};
pub use monitoring::{ACCESSED_FILES_ERROR, SystemMonitoring};
pub use report::Report;
