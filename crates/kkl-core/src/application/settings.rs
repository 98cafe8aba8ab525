use std::path::PathBuf;

use crate::domain::{ProjectName, TemplateSource};

pub const DEFAULT_DESCRIPTION: &str = "A Vue.js component project";
pub const DEFAULT_METADATA_FILE: &str = "package.json";
pub const DEFAULT_README_FILE: &str = "README.md";

/// Per-run parameters of the pipeline.
///
/// `base_dir` replaces any reliance on the process working directory:
/// destinations are always `base_dir/<dirname>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    pub base_dir: PathBuf,
    pub template: TemplateSource,
    /// Template-relative path of the file rendered with package metadata.
    pub metadata_file: String,
    /// Template-relative path of the regenerated README.
    pub readme_file: String,
    /// Suggested answer to the description prompt.
    pub default_description: String,
}

impl ScaffoldSettings {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            template: TemplateSource::default(),
            metadata_file: DEFAULT_METADATA_FILE.into(),
            readme_file: DEFAULT_README_FILE.into(),
            default_description: DEFAULT_DESCRIPTION.into(),
        }
    }

    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    pub fn destination(&self, dirname: &ProjectName) -> PathBuf {
        self.base_dir.join(dirname.as_str())
    }
}
