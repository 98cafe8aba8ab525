//! kkl core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `kkl`
//! component-project scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              kkl-cli (CLI)              │
//! │   (argument parsing, prompts, output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            ScaffoldService              │
//! │ resolve → collect → materialize →       │
//! │ install                                 │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ Filesystem, VersionControl, Prompter,   │
//! │ PackageInstaller, Reporter              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      kkl-adapters (Infrastructure)      │
//! │ LocalFilesystem, GitCli, ProcessInstaller│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kkl_core::prelude::*;
//!
//! let service = ScaffoldService::new(
//!     Box::new(filesystem),
//!     Box::new(vcs),
//!     Box::new(installer),
//!     Box::new(prompter),
//!     Box::new(reporter),
//!     ScaffoldSettings::new("/home/me/projects"),
//! );
//! match service.run("kkl-button")? {
//!     ScaffoldOutcome::Completed { destination, .. } => println!("{}", destination.display()),
//!     ScaffoldOutcome::Declined => {}
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ScaffoldOutcome, ScaffoldService, ScaffoldSettings,
        ports::{Filesystem, PackageInstaller, Prompter, Reporter, VersionControl},
    };
    pub use crate::domain::{
        EntryKind, Identity, InstallChoice, NextSteps, PackageInfo, PackageManager, ProjectName,
        RenderContext, TemplateSource,
    };
    pub use crate::error::{ErrorCategory, ScaffoldError, ScaffoldResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
