//! External command execution.
//!
//! Every shell-out in sysreport goes through [`run`] or [`run_quiet`]:
//! stdout is captured and a non-zero exit counts as failure. `run` lets the
//! child's stderr through to the terminal; `run_quiet` discards it. An
//! optional timeout kills commands that hang.

use std::{
    io::{self, Read},
    process::{Child, Command, ExitStatus, Stdio},
    thread,
    time::{Duration, Instant},
};

use tracing::debug;

/// How often a running child is polled while a timeout is in effect.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Errors from running an external command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program} exited with {status}")]
    Status { program: String, status: ExitStatus },

    #[error("{program} timed out after {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("failed to read output of {program}: {source}")]
    Read { program: String, source: io::Error },
}

/// Run `program` with `args` and return its stdout.
///
/// Stdout is decoded lossily; stderr is inherited. With `timeout` set, the
/// child is killed once the limit passes and [`CommandError::TimedOut`] is
/// returned.
pub fn run(program: &str, args: &[&str], timeout: Option<Duration>) -> Result<String, CommandError> {
    run_with(program, args, timeout, Stdio::inherit())
}

/// Like [`run`], but the child's stderr is discarded.
pub fn run_quiet(
    program: &str,
    args: &[&str],
    timeout: Option<Duration>,
) -> Result<String, CommandError> {
    run_with(program, args, timeout, Stdio::null())
}

fn run_with(
    program: &str,
    args: &[&str],
    timeout: Option<Duration>,
    stderr: Stdio,
) -> Result<String, CommandError> {
    debug!(program, ?args, "running command");

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(stderr)
        .spawn()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Drain stdout off-thread so a chatty child can't fill the pipe and
    // stall while we wait on it.
    let mut stdout = child.stdout.take();
    let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        if let Some(out) = stdout.as_mut() {
            out.read_to_end(&mut buf)?;
        }
        Ok(buf)
    });

    let read_error = |source| CommandError::Read {
        program: program.to_string(),
        source,
    };

    let status = match timeout {
        Some(limit) => wait_with_deadline(&mut child, limit).map_err(read_error)?,
        None => Some(child.wait().map_err(read_error)?),
    };

    // Only the direct child was killed. A descendant can still hold the pipe
    // open, so the reader is left to finish on its own.
    let Some(status) = status else {
        return Err(CommandError::TimedOut {
            program: program.to_string(),
            timeout: timeout.unwrap_or_default(),
        });
    };

    let bytes = reader
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("stdout reader panicked")));

    if !status.success() {
        return Err(CommandError::Status {
            program: program.to_string(),
            status,
        });
    }

    let bytes = bytes.map_err(read_error)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Wait for `child` to exit, killing it once `limit` has elapsed.
///
/// Returns `None` if the child had to be killed.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> io::Result<Option<ExitStatus>> {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if start.elapsed() >= limit {
            // The child may exit on its own between the check and the kill.
            let _ = child.kill();
            child.wait()?;
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}
