//! Runs `npm install` / `yarn install` as a child process.

use std::{
    path::Path,
    process::{Command, Stdio},
};

use kkl_core::{
    application::{ApplicationError, ports::PackageInstaller},
    domain::PackageManager,
    error::ScaffoldResult,
};
use tracing::{debug, instrument};

use crate::process::display;

/// Spawns the package manager with inherited stdio so its progress output
/// reaches the user's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl ProcessInstaller {
    pub fn new() -> Self {
        Self
    }
}

/// Executable name for `manager` on this platform.
///
/// npm and yarn ship as `.cmd` shims on Windows, which `Command` does not
/// resolve on its own.
fn executable(manager: PackageManager) -> String {
    if cfg!(windows) {
        format!("{}.cmd", manager.program())
    } else {
        manager.program().to_owned()
    }
}

impl PackageInstaller for ProcessInstaller {
    #[instrument(skip(self), fields(manager = %manager, directory = %directory.display()))]
    fn install(&self, manager: PackageManager, directory: &Path) -> ScaffoldResult<()> {
        let mut cmd = Command::new(executable(manager));
        cmd.args(manager.install_args())
            .current_dir(directory)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        let command = display(&cmd);

        let status = cmd.status().map_err(|e| ApplicationError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            return Err(ApplicationError::CommandFailed {
                command,
                reason: status.to_string(),
            }
            .into());
        }

        debug!("Dependencies installed");
        Ok(())
    }
}
