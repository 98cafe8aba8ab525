//! The metadata record threaded through the scaffolding pipeline.

use crate::domain::{project_name::ProjectName, render::RenderContext};

/// Source repository of the generated package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub url: Option<String>,
}

/// Project identity collected from the user.
///
/// Built once by the metadata collector and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInfo {
    /// Destination directory name, exactly as entered.
    pub dirname: ProjectName,
    /// Package name derived from `dirname` (see [`ProjectName::package_name`]).
    pub name: String,
    pub description: String,
    pub author: String,
    pub repository: Repository,
}

impl PackageInfo {
    /// Compose a record, deriving `name` from `dirname`.
    ///
    /// An empty repository URL is stored as `None`.
    pub fn new(
        dirname: ProjectName,
        description: impl Into<String>,
        author: impl Into<String>,
        repository_url: impl Into<String>,
    ) -> Self {
        let url = repository_url.into();
        Self {
            name: dirname.package_name(),
            dirname,
            description: description.into(),
            author: author.into(),
            repository: Repository {
                url: (!url.is_empty()).then_some(url),
            },
        }
    }

    /// Flat placeholder map for rendering template files.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new()
            .with_variable("dirname", self.dirname.as_str())
            .with_variable("name", &self.name)
            .with_variable("description", &self.description)
            .with_variable("author", &self.author)
            .with_variable(
                "repository.url",
                self.repository.url.as_deref().unwrap_or_default(),
            )
    }
}

/// Committer identity read from the local VCS configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Author string in the conventional `name <email>` form.
    pub fn to_author(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }
}
