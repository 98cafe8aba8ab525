//! Application layer for kkl.
//!
//! This layer contains:
//! - **Services**: the scaffolding pipeline and its four stages
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Settings**: per-run parameters such as the base directory and template
//! - **Errors**: Application-specific error types
//!
//! Pure rules (name derivation, placeholder rendering, boilerplate) live in
//! `crate::domain`.

pub(crate) mod best_effort;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

pub use services::{ScaffoldOutcome, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PackageInstaller, Prompter, Reporter, VersionControl};

pub use error::ApplicationError;
pub use settings::{
    DEFAULT_DESCRIPTION, DEFAULT_METADATA_FILE, DEFAULT_README_FILE, ScaffoldSettings,
};
