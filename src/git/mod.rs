//! Git metadata abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries the version logic needs, allowing for multiple implementations
//! including real repositories and a mock for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait, which defines the
//! repository metadata git-semver reads. The concrete implementations are:
//!
//! - [repository::GitRepository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use git_semver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tag = repo.latest_tag()?;
//! let distance = repo.commits_since(&tag)?;
//! println!("{} commits since {}", distance, tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::GitRepository;

use crate::error::Result;

/// Read-only repository metadata trait
///
/// This trait abstracts the git queries needed to derive and validate
/// versions, so the version logic never touches a repository directly.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying failures (like `git2::Error`) to the appropriate
/// [crate::error::GitSemverError] variants; the absence of a tag at the
/// requested recency is always [crate::error::GitSemverError::NoTagFound].
///
/// ## Implementations
///
/// - [GitRepository](repository::GitRepository): Real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation for mocking repository state
pub trait Repository: Send + Sync {
    /// Get the nth most recent tag, by version recency
    ///
    /// Depth 0 is the most recent tag, 1 the one before it, and so on.
    /// Recency follows version order, not tag creation time: names that
    /// parse as versions rank by precedence, anything else falls back to
    /// lexicographic order below them.
    ///
    /// # Arguments
    /// * `n` - Recency depth (0 = most recent)
    ///
    /// # Returns
    /// * `Ok(String)` - The raw tag name at that depth
    /// * `Err(NoTagFound)` - If fewer than `n + 1` tags exist
    ///
    /// # Example
    /// ```rust
    /// # use git_semver::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// let previous = repo.nth_most_recent_tag(1)?;
    /// println!("Release before the current one: {}", previous);
    /// # Ok(())
    /// # }
    /// ```
    fn nth_most_recent_tag(&self, n: usize) -> Result<String>;

    /// Get the most recent tag
    ///
    /// Shorthand for [`nth_most_recent_tag(0)`](Repository::nth_most_recent_tag).
    fn latest_tag(&self) -> Result<String> {
        self.nth_most_recent_tag(0)
    }

    /// Get the name of the currently checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - The branch name, or `"HEAD"` when HEAD is detached
    /// * `Err` - If HEAD cannot be resolved (e.g., an unborn branch)
    ///
    /// # Example
    /// ```rust
    /// # use git_semver::git::Repository;
    /// # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
    /// let branch = repo.current_branch()?;
    /// println!("On branch {}", branch);
    /// # Ok(())
    /// # }
    /// ```
    fn current_branch(&self) -> Result<String>;

    /// Count commits reachable from HEAD but not from the given tag
    ///
    /// A count of 0 means HEAD sits exactly on the tagged commit (or the
    /// tag is ahead of HEAD).
    ///
    /// # Arguments
    /// * `tag` - Raw tag name, as returned by the tag queries
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of commits since the tag
    /// * `Err` - If the tag or HEAD cannot be resolved
    fn commits_since(&self, tag: &str) -> Result<u64>;

    /// Get the abbreviated hash of the current HEAD commit
    fn short_commit_hash(&self) -> Result<String>;
}
