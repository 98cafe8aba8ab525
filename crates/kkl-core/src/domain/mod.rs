//! Core domain layer for kkl.
//!
//! This module contains pure logic with no I/O. Prompting, the filesystem,
//! `git` and package managers are reached through the ports defined in the
//! application layer.
//!
//! - **No I/O**: no filesystem, network, or process calls
//! - **No external crates**: only std library + thiserror
//! - **Immutable values**: everything here is Clone + PartialEq

pub mod boilerplate;
pub mod destination;
pub mod error;
pub mod package_info;
pub mod package_manager;
pub mod project_name;
pub mod render;
pub mod template_source;

// Re-exports for convenience
pub use boilerplate::NextSteps;
pub use destination::{EntryKind, Resolution};
pub use error::{DomainError, ErrorCategory};
pub use package_info::{Identity, PackageInfo, Repository};
pub use package_manager::{InstallChoice, PackageManager};
pub use project_name::ProjectName;
pub use render::RenderContext;
pub use template_source::{DEFAULT_TEMPLATE_URL, TemplateSource};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module behaviour
    // ========================================================================

    #[test]
    fn metadata_file_round_trips_collected_fields() {
        let info = PackageInfo::new(
            ProjectName::parse("KKL-Slider").unwrap(),
            "A slider",
            Identity {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }
            .to_author(),
            "https://example.com/slider.git",
        );

        let template = r#"{
  "name": "{{name}}",
  "description": "{{description}}",
  "author": "{{author}}",
  "repository": { "type": "git", "url": "{{repository.url}}" },
  "version": "{{version}}"
}"#;

        let rendered = info.render_context().render(template);

        assert!(rendered.contains(r#""name": "Slider""#));
        assert!(rendered.contains(r#""description": "A slider""#));
        assert!(rendered.contains(r#""author": "Ada <ada@example.com>""#));
        assert!(rendered.contains(r#""url": "https://example.com/slider.git""#));
        assert!(rendered.contains(r#""version": "{{version}}""#));
    }

    #[test]
    fn readme_uses_derived_name_not_dirname() {
        let info = PackageInfo::new(ProjectName::parse("kkl-tabs").unwrap(), "", "", "");
        let body = boilerplate::readme(&info.name);
        assert!(body.starts_with("# tabs"));
        assert!(!body.contains("kkl-tabs"));
    }

    #[test]
    fn invalid_name_is_a_validation_error() {
        let err = ProjectName::parse("a/b").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
