//! Log source resolution: find the first backend that yields log text.
//!
//! Which backend exists depends on the distribution and init system
//! (systemd journal, rsyslog's `syslog`, older `messages`). A missing one is
//! normal, so each strategy's failure is logged and skipped. Only running
//! out of strategies is an error.

use std::{fs, io, path::Path, time::Duration};

use tracing::{debug, info};

use crate::command::{self, CommandError};
use crate::config::SourcesConfig;

/// Why a single strategy produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum AcquireError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("no command configured")]
    EmptyCommand,
}

/// Resolution failed outright.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("No working log source found (tried {})", .tried.join(", "))]
    NoLogSourceAvailable { tried: Vec<String> },
}

type Acquire<'a> = Box<dyn FnOnce() -> Result<String, AcquireError> + 'a>;

/// One named way of getting log text.
pub struct Strategy<'a> {
    label: String,
    target: String,
    acquire: Acquire<'a>,
}

impl<'a> Strategy<'a> {
    /// `label` names the strategy in logs; `target` is what it reads
    /// (program or path) and is what the exhaustion message lists.
    pub fn new(
        label: impl Into<String>,
        target: impl Into<String>,
        acquire: impl FnOnce() -> Result<String, AcquireError> + 'a,
    ) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            acquire: Box::new(acquire),
        }
    }

    /// Run a command and use its stdout.
    pub fn command(label: &str, argv: &'a [String], timeout: Option<Duration>) -> Self {
        let target = argv.first().cloned().unwrap_or_default();
        Self::new(label, target, move || {
            let (program, args) = argv.split_first().ok_or(AcquireError::EmptyCommand)?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            Ok(command::run(program, &args, timeout)?)
        })
    }

    /// Read a whole file as UTF-8.
    pub fn file(label: &str, path: &'a Path) -> Self {
        Self::new(label, path.display().to_string(), move || {
            fs::read_to_string(path).map_err(|source| AcquireError::Read {
                path: path.display().to_string(),
                source,
            })
        })
    }
}

/// Log text and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLog {
    pub label: String,
    pub text: String,
}

/// The configured strategies in priority order: journal, syslog, messages.
pub fn default_strategies(config: &SourcesConfig, timeout: Option<Duration>) -> Vec<Strategy<'_>> {
    vec![
        Strategy::command("journalctl", &config.journal_command, timeout),
        Strategy::file("syslog", &config.syslog_path),
        Strategy::file("messages", &config.messages_path),
    ]
}

/// Try each strategy in order and return the first success.
///
/// Strategies after the first success are never invoked.
pub fn resolve<'a>(
    strategies: impl IntoIterator<Item = Strategy<'a>>,
) -> Result<ResolvedLog, SourceError> {
    let mut tried = Vec::new();

    for strategy in strategies {
        match (strategy.acquire)() {
            Ok(text) => {
                info!(source = %strategy.label, bytes = text.len(), "log source resolved");
                return Ok(ResolvedLog {
                    label: strategy.label,
                    text,
                });
            }
            Err(e) => {
                debug!(source = %strategy.label, error = %e, "log source unavailable");
                tried.push(strategy.target);
            }
        }
    }

    Err(SourceError::NoLogSourceAvailable { tried })
}
