//! Most-accessed files: open files from `lsof`, or the newest entries in
//! the log directory when `lsof` isn't installed.

use std::time::Duration;

use tracing::warn;

use crate::command;
use crate::config::MonitorConfig;
use crate::model::ACCESSED_FILES_ERROR;

/// Names of files currently open, or recently touched under the log dir.
///
/// Never fails: if the command can't be run, the result is a single
/// [`ACCESSED_FILES_ERROR`] entry.
pub fn most_accessed_files(config: &MonitorConfig, timeout: Option<Duration>) -> Vec<String> {
    let result = if config.lsof_path.exists() {
        let lsof = config.lsof_path.to_string_lossy();
        command::run_quiet(&lsof, &["-Fn"], timeout).map(|out| parse_lsof(&out))
    } else {
        let dir = config.log_dir.to_string_lossy();
        command::run_quiet("ls", &["-lt", dir.as_ref()], timeout).map(|out| parse_ls(&out))
    };

    result.unwrap_or_else(|e| {
        warn!(error = %e, "could not list accessed files");
        vec![ACCESSED_FILES_ERROR.to_string()]
    })
}

/// Trimmed, non-empty lines without tool warnings.
fn significant_lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains("WARNING"))
}

/// `lsof -F n` prints one field per line; name fields start with `n`.
fn parse_lsof(output: &str) -> Vec<String> {
    significant_lines(output)
        .filter_map(|line| line.strip_prefix('n'))
        .map(str::to_string)
        .collect()
}

/// `ls -l` rows have the name from the ninth column on. The first line is
/// the `total` header.
fn parse_ls(output: &str) -> Vec<String> {
    significant_lines(output)
        .skip(1)
        .filter_map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            fields.get(8..).filter(|name| !name.is_empty()).map(|name| name.join(" "))
        })
        .collect()
}
