use crate::config::Config;
use crate::domain::{compose, RepoSnapshot, Tag, Version};
use crate::error::{GitSemverError, Result};
use crate::git::Repository;
use std::cmp::Ordering;

/// Effective version derived from the latest tag and working state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Composed effective version string
    pub version: String,
    /// The tag the version derives from, as named in the repository
    pub base_tag: String,
    /// Working state the derivation saw
    pub snapshot: RepoSnapshot,
}

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// The parsed candidate version
    pub candidate: Version,
    /// Reference tag the candidate was compared against, if one existed
    pub reference: Option<String>,
}

/// Derives and validates versions against repository state
pub struct VersionResolver {
    config: Config,
}

impl VersionResolver {
    /// Create a new version resolver
    pub fn new(config: Config) -> Self {
        VersionResolver { config }
    }

    /// Derive the effective version for the current repository state
    ///
    /// Reads the most recent tag, the commit distance to it, the branch and
    /// the short HEAD hash, then composes them into one version string. The
    /// latest tag must parse (after prefix stripping) or the derivation
    /// fails with [`GitSemverError::ReferenceMalformed`]; a repository with
    /// no tags at all fails with [`GitSemverError::NoTagFound`].
    pub fn resolve<R: Repository>(&self, repo: &R) -> Result<ResolvedVersion> {
        let tag = Tag::new(repo.latest_tag()?);
        let base = tag.version(&self.config.tags.prefix)?;

        let snapshot = RepoSnapshot::new(
            repo.commits_since(&tag.name)?,
            repo.current_branch()?,
            repo.short_commit_hash()?,
        );

        let version = compose(&base, &snapshot, &self.config.compose.distance_label);

        Ok(ResolvedVersion {
            version,
            base_tag: tag.name,
            snapshot,
        })
    }

    /// Validate a candidate version string against the repository
    ///
    /// The candidate must satisfy the full grammar. It is then compared
    /// against the tag at the configured reference depth (default 1, the
    /// tag before the most recent one); a candidate older than the
    /// reference fails with [`GitSemverError::NotMonotonic`]. When no tag
    /// exists at that depth the candidate passes without comparison and the
    /// returned [`Validated::reference`] is `None`.
    pub fn validate<R: Repository>(&self, repo: &R, candidate: &str) -> Result<Validated> {
        let version = Version::parse(candidate)?;

        let reference = match repo.nth_most_recent_tag(self.config.validate.reference_depth) {
            Ok(name) => Some(Tag::new(name)),
            Err(GitSemverError::NoTagFound) => None,
            Err(e) => return Err(e),
        };

        if let Some(tag) = &reference {
            let reference_version = tag.version(&self.config.tags.prefix)?;

            if version.cmp_precedence(&reference_version) == Ordering::Less {
                return Err(GitSemverError::not_monotonic(candidate, &tag.name));
            }
        }

        Ok(Validated {
            candidate: version,
            reference: reference.map(|tag| tag.name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn resolver() -> VersionResolver {
        VersionResolver::new(Config::default())
    }

    #[test]
    fn test_resolve_clean_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.2.3");
        repo.set_branch("main");
        repo.set_short_hash("abc123");

        let resolved = resolver().resolve(&repo).unwrap();
        assert_eq!(resolved.version, "1.2.3+main.abc123");
        assert_eq!(resolved.base_tag, "v1.2.3");
        assert_eq!(resolved.snapshot.commits_since_tag, 0);
    }

    #[test]
    fn test_resolve_with_distance_and_pre_release() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.2.3-beta");
        repo.set_distance("v1.2.3-beta", 4);
        repo.set_branch("feature-x");
        repo.set_short_hash("deadbe");

        let resolved = resolver().resolve(&repo).unwrap();
        assert_eq!(resolved.version, "1.2.3-beta.dev.4+feature-x.deadbe");
    }

    #[test]
    fn test_resolve_with_base_metadata() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.2.3+build5");
        repo.set_distance("v1.2.3+build5", 2);
        repo.set_branch("main");
        repo.set_short_hash("cafe01");

        let resolved = resolver().resolve(&repo).unwrap();
        assert_eq!(resolved.version, "1.2.3-dev.2+build5.main.cafe01");
    }

    #[test]
    fn test_resolve_uses_latest_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");
        repo.set_branch("main");
        repo.set_short_hash("abc123");

        let resolved = resolver().resolve(&repo).unwrap();
        assert_eq!(resolved.base_tag, "v1.1.0");
        assert_eq!(resolved.version, "1.1.0+main.abc123");
    }

    #[test]
    fn test_resolve_no_tags() {
        let repo = MockRepository::new();
        assert!(matches!(
            resolver().resolve(&repo).unwrap_err(),
            GitSemverError::NoTagFound
        ));
    }

    #[test]
    fn test_resolve_unparseable_latest_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("nightly-2024-01-01");

        let err = resolver().resolve(&repo).unwrap_err();
        assert!(matches!(
            err,
            GitSemverError::ReferenceMalformed { ref tag } if tag == "nightly-2024-01-01"
        ));
    }

    #[test]
    fn test_resolve_custom_prefix() {
        let mut config = Config::default();
        config.tags.prefix = "release-".to_string();

        let mut repo = MockRepository::new();
        repo.add_tag("release-2.0.0");
        repo.set_branch("main");
        repo.set_short_hash("abc123");

        let resolved = VersionResolver::new(config).resolve(&repo).unwrap();
        assert_eq!(resolved.version, "2.0.0+main.abc123");
        assert_eq!(resolved.base_tag, "release-2.0.0");
    }

    #[test]
    fn test_resolve_custom_distance_label() {
        let mut config = Config::default();
        config.compose.distance_label = "post".to_string();

        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.set_distance("v1.0.0", 3);
        repo.set_branch("main");
        repo.set_short_hash("abc123");

        let resolved = VersionResolver::new(config).resolve(&repo).unwrap();
        assert_eq!(resolved.version, "1.0.0-post.3+main.abc123");
    }

    #[test]
    fn test_resolve_sanitizes_branch() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.set_branch("feature/login");
        repo.set_short_hash("abc123");

        let resolved = resolver().resolve(&repo).unwrap();
        assert_eq!(resolved.version, "1.0.0+feature-login.abc123");
        assert!(Version::parse(&resolved.version).is_ok());
    }

    #[test]
    fn test_validate_accepts_later_candidate() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.1.0");
        repo.add_tag("v1.2.0");

        // Default depth 1 compares against v1.1.0
        let validated = resolver().validate(&repo, "1.2.0").unwrap();
        assert_eq!(validated.reference, Some("v1.1.0".to_string()));
        assert_eq!(validated.candidate, Version::parse("1.2.0").unwrap());
    }

    #[test]
    fn test_validate_accepts_equal_candidate() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.1.0");
        repo.add_tag("v1.2.0");

        assert!(resolver().validate(&repo, "1.1.0").is_ok());
    }

    #[test]
    fn test_validate_rejects_regression() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.1.0");
        repo.add_tag("v1.2.0");

        let err = resolver().validate(&repo, "1.0.0").unwrap_err();
        assert!(matches!(
            err,
            GitSemverError::NotMonotonic { ref candidate, ref reference }
                if candidate == "1.0.0" && reference == "v1.1.0"
        ));
    }

    #[test]
    fn test_validate_depth_skips_latest_tag() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");

        // 1.0.5 is older than the latest tag but not older than the
        // reference one step back, so it passes
        let validated = resolver().validate(&repo, "1.0.5").unwrap();
        assert_eq!(validated.reference, Some("v1.0.0".to_string()));
    }

    #[test]
    fn test_validate_depth_zero_compares_latest() {
        let mut config = Config::default();
        config.validate.reference_depth = 0;

        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");

        let err = VersionResolver::new(config).validate(&repo, "1.0.5").unwrap_err();
        assert!(matches!(err, GitSemverError::NotMonotonic { .. }));
    }

    #[test]
    fn test_validate_no_reference_succeeds() {
        let repo = MockRepository::new();

        let validated = resolver().validate(&repo, "0.1.0").unwrap();
        assert_eq!(validated.reference, None);
    }

    #[test]
    fn test_validate_single_tag_has_no_reference_at_default_depth() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");

        // Depth 1 looks past the only tag, so there is nothing to compare
        let validated = resolver().validate(&repo, "0.0.1").unwrap();
        assert_eq!(validated.reference, None);
    }

    #[test]
    fn test_validate_malformed_candidate() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");

        let err = resolver().validate(&repo, "1.2").unwrap_err();
        assert!(matches!(
            err,
            GitSemverError::MalformedVersion { ref input } if input == "1.2"
        ));
    }

    #[test]
    fn test_validate_malformed_reference() {
        let mut repo = MockRepository::new();
        repo.add_tag("nightly");
        repo.add_tag("v1.1.0");

        let err = resolver().validate(&repo, "1.2.0").unwrap_err();
        assert!(matches!(
            err,
            GitSemverError::ReferenceMalformed { ref tag } if tag == "nightly"
        ));
    }

    #[test]
    fn test_validate_ignores_pre_release_in_comparison() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.1.0");
        repo.add_tag("v1.2.0");

        // Same triple as the reference: equal under release precedence
        assert!(resolver().validate(&repo, "1.1.0-alpha").is_ok());
    }

    #[test]
    fn test_validate_candidate_keeps_tag_prefix_out() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.0.0");
        repo.add_tag("v1.1.0");

        // Candidates are version strings, not tag names
        assert!(resolver().validate(&repo, "v1.2.0").is_err());
    }
}
