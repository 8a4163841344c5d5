//! Version subcommand execution.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Run the executable with `args` and capture its standard output.
///
/// Only stdout is read; stderr goes to the null device. The exit status is
/// ignored, so a command that prints its version and then exits non-zero
/// still yields output.
///
/// # Returns
///
/// `Some(String)` with the trimmed stdout, or `None` when:
/// - the process could not be spawned (missing, not executable, I/O error)
/// - `limit` is set and the command did not finish in time
/// - stdout was empty or whitespace only
pub(crate) async fn run_version_command(
    path: &Path,
    args: &[String],
    limit: Option<Duration>,
) -> Option<String> {
    let mut command = Command::new(path);
    command
        .args(args)
        .kill_on_drop(true)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let result = match limit {
        Some(limit) => match timeout(limit, command.output()).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(path = %path.display(), ?limit, "version command timed out");
                return None;
            }
        },
        None => command.output().await,
    };

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "failed to run version command");
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(path = %path.display(), status = %output.status, "version command exited unsuccessfully");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    tracing::trace!(raw = %stdout, "version command output");

    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
