//! Application layer errors.
//!
//! These errors represent failures in orchestration or in the collaborators
//! behind the ports. Validation of names and sources is `DomainError`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::PackageManager;
use crate::error::{ErrorCategory, ScaffoldError};

/// Errors that occur while running the scaffolding pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Destination exists but is not a directory, so it cannot be overwritten.
    #[error("Target path {path} exists and is not a directory")]
    DestinationIsFile { path: PathBuf },

    /// Cloning the template failed.
    #[error("Downloading template from {url} failed: {reason}")]
    FetchFailed { url: String, reason: String },

    /// Rewriting the fetched template failed.
    #[error("Preparing project files failed at {path}: {reason}")]
    TransformFailed { path: PathBuf, reason: String },

    /// The package manager exited unsuccessfully.
    #[error("`{manager} install` failed: {reason}")]
    InstallFailed {
        manager: PackageManager,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be run or exited non-zero.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// Asking the user a question failed (no terminal, I/O error, ...).
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationIsFile { path } => vec![
                format!("'{}' is a file, not a directory", path.display()),
                "Choose a different project name".into(),
                "Or move the file out of the way first".into(),
            ],
            Self::FetchFailed { url, .. } => vec![
                format!("Check that {url} is reachable"),
                "Ensure git is installed and in your PATH".into(),
                "Use --template to clone from a different source".into(),
            ],
            Self::TransformFailed { path, .. } => vec![
                format!("The template was downloaded to {}", path.display()),
                "Check that the template contains the expected metadata file".into(),
                "Check file permissions in the destination".into(),
            ],
            Self::InstallFailed { manager, .. } => vec![
                format!("Ensure {manager} is installed and in your PATH"),
                format!("The project was created; run `{manager} install` by hand"),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Ensure `{command}` can run from this shell"),
            ],
            Self::PromptFailed { .. } => vec![
                "kkl init is interactive; run it from a terminal".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationIsFile { .. } => ErrorCategory::Validation,
            Self::FetchFailed { .. } => ErrorCategory::Fetch,
            Self::TransformFailed { .. } => ErrorCategory::Transform,
            Self::InstallFailed { .. } => ErrorCategory::Install,
            Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::PromptFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

/// The innermost message of a collaborator failure, without the wrapping
/// variant's prefix.
pub(crate) fn failure_reason(error: &ScaffoldError) -> String {
    match error {
        ScaffoldError::Application(
            ApplicationError::CommandFailed { reason, .. }
            | ApplicationError::FilesystemError { reason, .. },
        ) => reason.clone(),
        other => other.to_string(),
    }
}
