use crate::error::{GitSemverError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Tags live in insertion order, oldest first, so the last tag added is the
/// most recent one. Commit distances default to 0 unless set explicitly.
pub struct MockRepository {
    tags: Vec<String>,
    distances: HashMap<String, u64>,
    branch: String,
    short_hash: String,
}

impl MockRepository {
    /// Create a mock repository with no tags, on branch "main"
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            distances: HashMap::new(),
            branch: "main".to_string(),
            short_hash: "abc123".to_string(),
        }
    }

    /// Add a tag as the newest entry in history
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Set the commit distance between a tag and HEAD
    pub fn set_distance(&mut self, tag: impl Into<String>, commits: u64) {
        self.distances.insert(tag.into(), commits);
    }

    /// Set the current branch name
    pub fn set_branch(&mut self, branch: impl Into<String>) {
        self.branch = branch.into();
    }

    /// Set the abbreviated HEAD commit hash
    pub fn set_short_hash(&mut self, hash: impl Into<String>) {
        self.short_hash = hash.into();
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn nth_most_recent_tag(&self, n: usize) -> Result<String> {
        if n >= self.tags.len() {
            return Err(GitSemverError::NoTagFound);
        }

        Ok(self.tags[self.tags.len() - 1 - n].clone())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        Ok(self.distances.get(tag).copied().unwrap_or(0))
    }

    fn short_commit_hash(&self) -> Result<String> {
        Ok(self.short_hash.clone())
    }
}
