//! Helpers for running external programs.

use std::process::{Command, Output};

use kkl_core::{application::ApplicationError, error::ScaffoldResult};
use tracing::debug;

/// Human-readable form of `cmd` for messages, e.g. `git clone -- <url> <dir>`.
pub(crate) fn display(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `cmd` to completion with stdout and stderr captured.
///
/// Returns trimmed stdout on a zero exit. Otherwise the error reason is the
/// trimmed stderr, falling back to the exit status when stderr is empty.
pub(crate) fn run_captured(cmd: &mut Command) -> ScaffoldResult<String> {
    let command = display(cmd);
    debug!(%command, "Running command");

    let output = cmd.output().map_err(|e| ApplicationError::CommandFailed {
        command: command.clone(),
        reason: e.to_string(),
    })?;

    check_output(command, output)
}

fn check_output(command: String, output: Output) -> ScaffoldResult<String> {
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
    let reason = if stderr.is_empty() {
        output.status.to_string()
    } else {
        stderr
    };
    debug!(%command, %reason, "Command failed");

    Err(ApplicationError::CommandFailed { command, reason }.into())
}
