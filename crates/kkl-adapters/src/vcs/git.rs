//! `git` command-line adapter.
//!
//! Every invocation sets an explicit working directory; the process-wide
//! current directory is never read or changed.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use kkl_core::{
    application::{ApplicationError, ports::VersionControl},
    domain::Identity,
    error::ScaffoldResult,
};
use tracing::{debug, instrument};

use crate::process::run_captured;

const HISTORY_DIR: &str = ".git";

/// Runs the `git` binary found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    /// Directory whose configuration answers identity lookups.
    work_dir: PathBuf,
}

impl GitCli {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: "git".into(),
            work_dir: work_dir.into(),
        }
    }

    /// Use a different executable (e.g. an absolute path to git).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn command(&self, dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(dir);
        cmd
    }

    fn config_value(&self, key: &str) -> ScaffoldResult<String> {
        let value = run_captured(self.command(&self.work_dir).args(["config", key]))?;
        if value.is_empty() {
            return Err(ApplicationError::CommandFailed {
                command: format!("{} config {key}", self.program),
                reason: "value is empty".into(),
            }
            .into());
        }
        Ok(value)
    }
}

impl VersionControl for GitCli {
    fn history_dir(&self) -> &'static str {
        HISTORY_DIR
    }

    fn identity(&self) -> ScaffoldResult<Identity> {
        let name = self.config_value("user.name")?;
        let email = self.config_value("user.email")?;
        debug!(%name, %email, "Read git identity");
        Ok(Identity { name, email })
    }

    #[instrument(skip(self), fields(destination = %destination.display()))]
    fn clone_repository(&self, url: &str, destination: &Path) -> ScaffoldResult<()> {
        // Relative template paths resolve against the destination's parent.
        let parent = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        run_captured(
            self.command(parent)
                .args(["clone", "--", url])
                .arg(destination),
        )?;
        Ok(())
    }

    #[instrument(skip(self), fields(directory = %directory.display()))]
    fn init_repository(&self, directory: &Path) -> ScaffoldResult<()> {
        run_captured(self.command(directory).arg("init"))?;
        Ok(())
    }
}
