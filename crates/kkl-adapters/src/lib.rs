//! Infrastructure adapters for kkl.
//!
//! This crate implements the ports defined in `kkl_core::application::ports`.
//! It contains all process spawning and filesystem I/O, plus in-memory and
//! scripted adapters for driving the pipeline without a terminal.

pub mod filesystem;
pub mod package_manager;
pub mod prompt;
pub mod reporter;
pub mod vcs;

mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use package_manager::ProcessInstaller;
pub use prompt::{ScriptedAnswer, ScriptedPrompter};
pub use reporter::{RecordingReporter, ReportEvent};
pub use vcs::GitCli;
