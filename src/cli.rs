//! CLI interface for sysreport.
//!
//! One command, no required arguments: resolve a log source, classify it,
//! snapshot the system, write the report. Flags only override defaults.

mod format;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::model::Report;
use crate::{classify, monitor, report, source};

use format::format_summary;

/// sysreport — snapshot system logs and resource usage into one report.
#[derive(Debug, Parser)]
#[command(name = "sysreport", version, after_long_help = RUN_HELP)]
pub struct Cli {
    /// Read configuration from this TOML file instead of
    /// `~/.sysreport/config.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the report here instead of the configured output path.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log more to stderr. Repeat for debug output. `RUST_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

const RUN_HELP: &str = r"Log sources, tried in order until one works:
  1. journalctl -b --no-pager
  2. /var/log/syslog
  3. /var/log/messages

Exits 1 without writing a report if none is readable.";

/// Run the pipeline, returning an error message on failure.
pub fn run(cli: &Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref())?;
    let timeout = config.command_timeout();
    let out = cli.out.clone().unwrap_or_else(|| config.output.clone());

    let resolved = source::resolve(source::default_strategies(&config.sources, timeout))
        .map_err(|e| e.to_string())?;
    info!(source = %resolved.label, "analyzing logs");

    let log_analysis = classify::analyze(&resolved.text);
    println!("{}", format_summary(&log_analysis));

    let system_monitoring =
        monitor::collect(&config.monitor, timeout).map_err(|e| e.to_string())?;

    let snapshot = Report::assemble(log_analysis, system_monitoring);
    report::write(&out, &snapshot)
        .map_err(|e| format!("failed to write {}: {e}", out.display()))?;

    eprintln!("Report written to {}", out.display());
    Ok(())
}
