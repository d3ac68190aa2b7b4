use crate::domain::Version;
use crate::error::{GitSemverError, Result};

/// Represents a git tag that may carry a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Strip the configured prefix from the tag name (e.g., "v1.2.3" -> "1.2.3")
    ///
    /// Names that do not start with the prefix are returned unchanged.
    pub fn version_part<'a>(&'a self, prefix: &str) -> &'a str {
        self.name.strip_prefix(prefix).unwrap_or(&self.name)
    }

    /// Parse the tag into a version after stripping the prefix
    ///
    /// A tag that fails the grammar is reported as
    /// [`GitSemverError::ReferenceMalformed`] naming the raw tag: the bad
    /// string lives in repository history, not in caller input.
    pub fn version(&self, prefix: &str) -> Result<Version> {
        Version::parse(self.version_part(prefix))
            .map_err(|_| GitSemverError::reference(&self.name))
    }
}
