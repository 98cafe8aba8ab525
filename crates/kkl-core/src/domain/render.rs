//! Placeholder rendering for template files.
//!
//! Templates use mustache-style `{{field}}` tokens. Resolution is a single
//! lookup in a flat map: `{{repository.url}}` looks up the key
//! `"repository.url"`; there is no nested path walking.
//!
//! # Edge Cases
//!
//! - `{{ name }}` → whitespace inside the braces is ignored
//! - `{{unknown}}` → left verbatim
//! - an unterminated `{{` → the rest of the input is left verbatim
//! - substituted values are never re-scanned, so a description containing
//!   `{{name}}` is written out literally
//! - no escaping is applied; the output is a structured metadata file and the
//!   user supplying the values is trusted

use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Variables available to a rendered template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, consuming self and returning the extended context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render `template`, replacing every known `{{key}}` token.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            let Some(end) = after_open.find(CLOSE) else {
                // Unterminated token: emit the remainder untouched.
                out.push_str(&rest[start..]);
                return out;
            };

            let key = after_open[..end].trim();
            match self.get(key) {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
            }

            rest = &after_open[end + CLOSE.len()..];
        }

        out.push_str(rest);
        out
    }
}
