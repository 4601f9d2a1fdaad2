//! sysreport configuration.
//!
//! Optional. Loaded from `--config <path>` when given, otherwise from
//! `~/.sysreport/config.toml` if it exists. Every key has a default, so a
//! run with no file at all uses the built-in well-known paths.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// sysreport configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Where the report is written. Relative paths resolve against the
    /// working directory.
    pub output: PathBuf,

    /// Kill external commands that run longer than this. `0` disables the limit.
    pub command_timeout_secs: u64,

    /// Log backends, tried in order.
    pub sources: SourcesConfig,

    /// Monitoring tool locations.
    pub monitor: MonitorConfig,
}

/// Log backends: the journal query, then the two flat files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SourcesConfig {
    /// Program and arguments that print the current boot's journal.
    pub journal_command: Vec<String>,

    pub syslog_path: PathBuf,

    pub messages_path: PathBuf,
}

/// Fixed paths probed by the monitoring commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MonitorConfig {
    /// `ip` is used for network stats when this exists; `netstat` otherwise.
    pub ip_path: PathBuf,

    /// `lsof` is used for the file listing when this exists; `ls` otherwise.
    pub lsof_path: PathBuf,

    /// Directory listed by the `ls` fallback.
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from("system_monitoring_report.json"),
            command_timeout_secs: 120,
            sources: SourcesConfig::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            journal_command: vec!["journalctl".into(), "-b".into(), "--no-pager".into()],
            syslog_path: PathBuf::from("/var/log/syslog"),
            messages_path: PathBuf::from("/var/log/messages"),
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            ip_path: PathBuf::from("/sbin/ip"),
            lsof_path: PathBuf::from("/usr/bin/lsof"),
            log_dir: PathBuf::from("/var/log"),
        }
    }
}

impl Config {
    /// Load config from `explicit`, or from the default path if it exists.
    ///
    /// An explicit path must exist. A missing default file yields
    /// [`Config::default`].
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            return Self::parse(&contents, path);
        }

        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&contents, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        }
    }

    /// The default config file path: `~/.sysreport/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sysreport").join("config.toml"))
    }

    /// The external command timeout, or `None` when disabled.
    pub fn command_timeout(&self) -> Option<Duration> {
        (self.command_timeout_secs > 0).then(|| Duration::from_secs(self.command_timeout_secs))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }
}
