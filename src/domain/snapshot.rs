/// Working-state capture of a repository at one point in time
///
/// Built fresh from the repository on every invocation and never cached:
/// commit distance, branch, and hash all drift as soon as history moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSnapshot {
    pub commits_since_tag: u64,
    pub branch: String,
    pub short_hash: String,
}

impl RepoSnapshot {
    /// Create a snapshot from freshly queried repository state
    pub fn new(
        commits_since_tag: u64,
        branch: impl Into<String>,
        short_hash: impl Into<String>,
    ) -> Self {
        RepoSnapshot {
            commits_since_tag,
            branch: branch.into(),
            short_hash: short_hash.into(),
        }
    }

    /// True when HEAD is not on a branch ("HEAD" is what git reports then)
    pub fn is_detached(&self) -> bool {
        self.branch == "HEAD"
    }

    /// Branch name reduced to a legal build-metadata identifier
    ///
    /// Branch names may contain '/', '_', '.' and other characters the
    /// version grammar rejects inside metadata; each such character becomes
    /// a hyphen so composed strings always re-parse.
    pub fn branch_component(&self) -> String {
        self.branch
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
            .collect()
    }
}
