//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`ScaffoldSettings`] built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--template`, `--no-color`; handled at the call-site)
//! 2. Environment variables (`KKL_TEMPLATE__URL`, `KKL_OUTPUT__NO_COLOR`, ...)
//! 3. Config file (`--config FILE`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use kkl_core::{
    application::{DEFAULT_DESCRIPTION, DEFAULT_METADATA_FILE, DEFAULT_README_FILE, ScaffoldSettings},
    domain::{DEFAULT_TEMPLATE_URL, TemplateSource},
};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "KKL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the skeleton comes from and which files are rewritten.
    pub template: TemplateConfig,
    /// Suggested prompt answers.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub url: String,
    pub metadata_file: String,
    pub readme_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            template: TemplateConfig {
                url: DEFAULT_TEMPLATE_URL.into(),
                metadata_file: DEFAULT_METADATA_FILE.into(),
                readme_file: DEFAULT_README_FILE.into(),
            },
            defaults: Defaults {
                description: DEFAULT_DESCRIPTION.into(),
            },
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> CliResult<Self> {
        let defaults = Self::default();

        Config::builder()
            .set_default("template.url", defaults.template.url)
            .and_then(|b| b.set_default("template.metadata_file", defaults.template.metadata_file))
            .and_then(|b| b.set_default("template.readme_file", defaults.template.readme_file))
            .and_then(|b| b.set_default("defaults.description", defaults.defaults.description))
            .and_then(|b| b.set_default("output.no_color", defaults.output.no_color))
            .map_err(config_error)?
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.kkl.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "kkl", "kkl")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kkl.toml"))
    }

    /// Pipeline settings for a run rooted at `base_dir`.
    ///
    /// `template_override` (from `--template`) wins over the configured URL.
    pub fn scaffold_settings(
        &self,
        base_dir: PathBuf,
        template_override: Option<&str>,
    ) -> CliResult<ScaffoldSettings> {
        // A bad --template is a usage error; a bad configured URL is not.
        let template = match template_override {
            Some(url) => TemplateSource::parse(url).map_err(|e| CliError::InvalidArgument {
                flag: "--template",
                source: e.into(),
            })?,
            None => TemplateSource::parse(&self.template.url).map_err(|e| CliError::Core(e.into()))?,
        };

        let mut settings = ScaffoldSettings::new(base_dir).with_template(template);
        settings.metadata_file = self.template.metadata_file.clone();
        settings.readme_file = self.template.readme_file.clone();
        settings.default_description = self.defaults.description.clone();
        Ok(settings)
    }

    /// Look up a dotted key such as `template.url`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "template.url" => Some(self.template.url.clone()),
            "template.metadata_file" => Some(self.template.metadata_file.clone()),
            "template.readme_file" => Some(self.template.readme_file.clone()),
            "defaults.description" => Some(self.defaults.description.clone()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            _ => None,
        }
    }
}

fn config_error(e: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}
