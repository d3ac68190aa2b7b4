use crate::domain::Version;
use crate::error::{GitSemverError, Result};
use git2::Repository as Git2Repo;
use std::cmp::Ordering;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
///
/// Tag ordering strips `tag_prefix` before parsing names as versions, so
/// the prefix must match the configured `tags.prefix`.
pub struct GitRepository {
    repo: Git2Repo,
    tag_prefix: String,
}

impl GitRepository {
    /// Open a repository at the exact path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(GitRepository {
            repo,
            tag_prefix: "v".to_string(),
        })
    }

    /// Discover a repository starting at the given path and walking upwards
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(GitRepository {
            repo,
            tag_prefix: "v".to_string(),
        })
    }

    /// Replace the tag prefix stripped when ordering tag names
    ///
    /// Defaults to "v"; callers with a configured prefix set it here so
    /// recency ordering and version derivation agree on the same names.
    pub fn with_tag_prefix(mut self, prefix: &str) -> Self {
        self.tag_prefix = prefix.to_string();
        self
    }

    /// All tag names, ordered oldest to most recent by version recency
    fn version_sorted_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .repo
            .tag_names(None)?
            .iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();

        tags.sort_by(|a, b| compare_tag_names(a, b, &self.tag_prefix));
        Ok(tags)
    }
}

/// Order tag names for recency
///
/// Names that parse as versions (after the prefix strip) rank by precedence;
/// at equal precedence a release outranks its pre-releases. Everything
/// unparseable sorts below parseable names, lexicographically.
fn compare_tag_names(a: &str, b: &str, prefix: &str) -> Ordering {
    match (tag_version(a, prefix), tag_version(b, prefix)) {
        (Some(va), Some(vb)) => va
            .cmp_precedence(&vb)
            .then_with(|| release_rank(&va).cmp(&release_rank(&vb)))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

fn tag_version(name: &str, prefix: &str) -> Option<Version> {
    Version::parse(name.strip_prefix(prefix).unwrap_or(name)).ok()
}

fn release_rank(version: &Version) -> u8 {
    if version.pre_release().is_some() {
        0
    } else {
        1
    }
}

impl super::Repository for GitRepository {
    fn nth_most_recent_tag(&self, n: usize) -> Result<String> {
        let tags = self.version_sorted_tags()?;

        if n >= tags.len() {
            return Err(GitSemverError::NoTagFound);
        }

        Ok(tags[tags.len() - 1 - n].clone())
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;

        // A detached HEAD resolves to a direct reference whose shorthand is
        // "HEAD"; branch names that are not valid UTF-8 degrade the same way.
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    fn commits_since(&self, tag: &str) -> Result<u64> {
        let reference = self
            .repo
            .find_reference(&format!("refs/tags/{}", tag))
            .map_err(|e| GitSemverError::repo(format!("Cannot resolve tag '{}': {}", tag, e)))?;

        // Peel through annotated tag objects to the tagged commit
        let tag_oid = reference.peel(git2::ObjectType::Commit)?.id();
        let head_oid = self.repo.head()?.peel_to_commit()?.id();

        let (ahead, _behind) = self.repo.graph_ahead_behind(head_oid, tag_oid)?;
        Ok(ahead as u64)
    }

    fn short_commit_hash(&self) -> Result<String> {
        let head = self.repo.revparse_single("HEAD")?;
        let short = head.short_id()?;

        short
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| GitSemverError::repo("Abbreviated commit id is not valid UTF-8"))
    }
}

// SAFETY: GitRepository only exposes read operations taking &self; libgit2 is
// built with threading support and these query paths share no mutable state.
unsafe impl Sync for GitRepository {}
