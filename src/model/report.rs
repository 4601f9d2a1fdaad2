//! Report: the single document written at the end of a run.

use serde::{Deserialize, Serialize};

use super::{LogAnalysis, SystemMonitoring};

/// Log analysis paired with the monitoring snapshot.
///
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub log_analysis: LogAnalysis,
    pub system_monitoring: SystemMonitoring,
}

impl Report {
    /// Pair the two halves of a run into one report.
    pub fn assemble(log_analysis: LogAnalysis, system_monitoring: SystemMonitoring) -> Self {
        Self {
            log_analysis,
            system_monitoring,
        }
    }
}
