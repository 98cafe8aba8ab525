//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the pipeline needs from the outside world.
//! The `kkl-adapters` crate provides the implementations, plus the
//! terminal-facing ones in `kkl-cli`.

use std::path::Path;

use crate::domain::{EntryKind, Identity, NextSteps, PackageManager};
use crate::error::ScaffoldResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `kkl_adapters::filesystem::LocalFilesystem` (production)
/// - `kkl_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// What currently occupies `path`.
    fn entry_kind(&self, path: &Path) -> EntryKind;

    /// Read a UTF-8 text file.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ScaffoldResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Port for the version-control binary.
///
/// Every operation takes explicit paths; implementations must never depend
/// on or change the process working directory.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    /// Name of the history directory inside a working copy (e.g. `.git`).
    fn history_dir(&self) -> &'static str;

    /// The locally configured committer identity.
    fn identity(&self) -> ScaffoldResult<Identity>;

    /// Clone `url` into `destination`, which must not exist yet.
    fn clone_repository(&self, url: &str, destination: &Path) -> ScaffoldResult<()>;

    /// Create a fresh, empty repository in `directory`.
    fn init_repository(&self, directory: &Path) -> ScaffoldResult<()>;
}

/// Port for running a package manager's install inside a project.
///
/// Output is streamed to the user's terminal, not captured.
#[cfg_attr(test, mockall::automock)]
pub trait PackageInstaller: Send + Sync {
    fn install(&self, manager: PackageManager, directory: &Path) -> ScaffoldResult<()>;
}

/// Port for asking the user questions.
///
/// Implemented by:
/// - `kkl_cli::prompt::DialoguerPrompter` (terminal)
/// - `kkl_adapters::prompt::ScriptedPrompter` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Yes/no question.
    fn confirm(&self, question: &str, default: bool) -> ScaffoldResult<bool>;

    /// Free-text question; an empty answer yields `default`.
    fn input(&self, question: &str, default: &str) -> ScaffoldResult<String>;

    /// Pick one of `options`; returns the chosen index.
    fn select(&self, question: &str, options: &[String], default: usize) -> ScaffoldResult<usize>;
}

/// Port for telling the user what the pipeline is doing.
#[cfg_attr(test, mockall::automock)]
pub trait Reporter: Send + Sync {
    /// A long-running step began (e.g. start a spinner).
    fn step_started(&self, message: &str);

    /// The current step finished successfully.
    fn step_succeeded(&self, message: &str);

    /// The current step failed; the error itself is returned separately.
    fn step_failed(&self, message: &str);

    /// A plain informational line.
    fn info(&self, message: &str);

    /// The completion block.
    fn next_steps(&self, steps: &NextSteps);
}
