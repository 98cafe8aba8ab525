use std::fmt;

use crate::domain::error::DomainError;

/// The component template cloned when nothing else is configured.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/yjh30/vue-ssr-component-tpl.git";

/// Location of the version-controlled template a project is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    url: String,
}

impl TemplateSource {
    pub fn parse(url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::InvalidTemplateSource {
                url,
                reason: "URL cannot be empty".into(),
            });
        }
        if url.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidTemplateSource {
                url,
                reason: "URL cannot contain whitespace".into(),
            });
        }
        // A leading dash would be read as an option by the VCS binary.
        if url.starts_with('-') {
            return Err(DomainError::InvalidTemplateSource {
                url,
                reason: "URL cannot start with '-'".into(),
            });
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for TemplateSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_TEMPLATE_URL.into(),
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
