//! Application services - the pipeline and its stages.
//!
//! Each stage borrows the ports it needs; [`ScaffoldService`] owns the
//! adapters and runs the stages in order.

pub mod installer;
pub mod materializer;
pub mod metadata_collector;
pub mod scaffold_service;
pub mod target_resolver;

pub use installer::DependencyInstaller;
pub use materializer::TemplateMaterializer;
pub use metadata_collector::MetadataCollector;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
pub use target_resolver::TargetResolver;
