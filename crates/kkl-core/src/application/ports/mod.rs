//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the pipeline, implemented by infrastructure
//!   - `Filesystem`: destination inspection, file rewrite, cleanup
//!   - `VersionControl`: identity lookup, template clone, repository init
//!   - `PackageInstaller`: dependency installation
//!   - `Prompter`: interactive questions
//!   - `Reporter`: progress and completion output

pub mod output;

pub use output::{Filesystem, PackageInstaller, Prompter, Reporter, VersionControl};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockPackageInstaller, MockPrompter, MockReporter, MockVersionControl,
};
