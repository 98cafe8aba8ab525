use std::fmt;

use crate::domain::error::DomainError;

/// Prefix carried by directory names of component projects; stripped once
/// when deriving the package name.
const PACKAGE_PREFIX: &str = "kkl";

/// A validated project name, used verbatim as a single path segment.
///
/// The name is the raw string the user typed. No trimming or case folding is
/// applied; the only guarantee is that joining it onto a base directory
/// yields a direct child of that directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a user-supplied project name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();

        let reason = if raw.is_empty() {
            Some("name cannot be empty")
        } else if raw == "." || raw == ".." {
            Some("name cannot be '.' or '..'")
        } else if raw.contains('/') || raw.contains('\\') {
            Some("name cannot contain path separators")
        } else if raw.contains('\0') {
            Some("name cannot contain NUL bytes")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name: raw,
                reason: reason.into(),
            }),
            None => Ok(Self(raw)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package name derived from this directory name.
    ///
    /// Strips one leading `kkl-` or `kkl` token, case-insensitively, from the
    /// start of the string only. `kkl-foo` → `foo`, `KKL-Foo` → `Foo`,
    /// `bar` → `bar`.
    pub fn package_name(&self) -> String {
        derive_package_name(&self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub(crate) fn derive_package_name(dirname: &str) -> String {
    let prefix_len = PACKAGE_PREFIX.len();

    // `get` keeps us on a char boundary for non-ASCII names.
    let has_prefix = dirname
        .get(..prefix_len)
        .is_some_and(|head| head.eq_ignore_ascii_case(PACKAGE_PREFIX));

    if !has_prefix {
        return dirname.to_owned();
    }

    let rest = &dirname[prefix_len..];
    rest.strip_prefix('-').unwrap_or(rest).to_owned()
}
