//! Unified error handling for kkl core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a category the CLI maps to an
//! exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for kkl core operations.
#[derive(Debug, Error, Clone)]
pub enum ScaffoldError {
    /// Errors from the domain layer (validation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline and collaborators).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in kkl".into(),
                "Please report this issue at: https://github.com/yjh30/kkl/issues".into(),
            ],
        }
    }

    /// Get error category for display and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories; each maps to a distinct CLI exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    /// The template could not be downloaded.
    Fetch,
    /// The downloaded template could not be rewritten.
    Transform,
    /// Dependency installation failed.
    Install,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn fetch_and_transform_have_distinct_categories() {
        let fetch: ScaffoldError = ApplicationError::FetchFailed {
            url: "u".into(),
            reason: "r".into(),
        }
        .into();
        let transform: ScaffoldError = ApplicationError::TransformFailed {
            path: PathBuf::from("x"),
            reason: "r".into(),
        }
        .into();
        assert_eq!(fetch.category(), ErrorCategory::Fetch);
        assert_eq!(transform.category(), ErrorCategory::Transform);
    }

    #[test]
    fn domain_validation_maps_through() {
        let err: ScaffoldError = DomainError::InvalidProjectName {
            name: "".into(),
            reason: "empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("Invalid project name"));
    }

    #[test]
    fn every_error_has_suggestions() {
        let errs: Vec<ScaffoldError> = vec![
            ApplicationError::PromptFailed { reason: "x".into() }.into(),
            ApplicationError::LockPoisoned.into(),
            ScaffoldError::Internal { message: "x".into() },
        ];
        for err in errs {
            assert!(!err.suggestions().is_empty(), "{err}");
        }
    }
}
