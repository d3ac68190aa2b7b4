use thiserror::Error;

/// Unified error type for git-semver operations
#[derive(Error, Debug)]
pub enum GitSemverError {
    #[error("Malformed version '{input}': expected MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]")]
    MalformedVersion { input: String },

    #[error("Reference tag '{tag}' does not contain a valid semantic version")]
    ReferenceMalformed { tag: String },

    #[error("Version '{candidate}' is older than reference tag '{reference}'")]
    NotMonotonic { candidate: String, reference: String },

    #[error("No version tag found in repository history")]
    NoTagFound,

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-semver
pub type Result<T> = std::result::Result<T, GitSemverError>;

impl GitSemverError {
    /// Create a malformed-version error for a rejected input string
    pub fn malformed(input: impl Into<String>) -> Self {
        GitSemverError::MalformedVersion {
            input: input.into(),
        }
    }

    /// Create a reference error for a tag that fails the version grammar
    pub fn reference(tag: impl Into<String>) -> Self {
        GitSemverError::ReferenceMalformed { tag: tag.into() }
    }

    /// Create a monotonicity error naming the candidate and its reference tag
    pub fn not_monotonic(candidate: impl Into<String>, reference: impl Into<String>) -> Self {
        GitSemverError::NotMonotonic {
            candidate: candidate.into(),
            reference: reference.into(),
        }
    }

    /// Create a repository error with context
    pub fn repo(msg: impl Into<String>) -> Self {
        GitSemverError::Repo(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitSemverError::Config(msg.into())
    }
}
