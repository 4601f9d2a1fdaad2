//! Output formatting for CLI display.

use owo_colors::{OwoColorize, Stream};

use crate::model::LogAnalysis;

/// Counter summary printed after classification.
pub(super) fn format_summary(analysis: &LogAnalysis) -> String {
    let header = "Log Analysis Results:".if_supports_color(Stream::Stdout, |text| text.bold());
    format!(
        "\n{header}\n\
         Total Login Attempts: {}\n\
         Total Failed Authentication Attempts: {}\n\
         Total System Reboots: {}",
        analysis.login_attempts, analysis.failed_auth_attempts, analysis.system_reboots,
    )
}
