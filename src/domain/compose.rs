//! Derived-version composition
//!
//! Turns a tagged base version plus the current working state into one
//! effective version string: commit distance extends the pre-release,
//! branch and short commit hash extend the build metadata.

use crate::domain::{RepoSnapshot, Version};

/// Compose the effective version string for the current repository state
///
/// Rules, in order:
/// 1. Start from the base version's pre-release (possibly absent).
/// 2. With one or more commits since the tag, append `<label>.<n>` to the
///    pre-release, dotting it onto an existing one ("beta" becomes
///    "beta.dev.4"); zero commits leave the pre-release untouched. The
///    label must itself satisfy the pre-release grammar; configuration
///    loading enforces this.
/// 3. Build metadata is the base's own metadata (if any) followed by the
///    sanitized branch name and the short commit hash.
///
/// The output is deterministic for identical inputs and always re-parses
/// under the version grammar. The base version is never modified.
///
/// # Examples
/// ```
/// use git_semver::domain::{compose, RepoSnapshot, Version};
///
/// let base = Version::parse("1.2.3-beta").unwrap();
/// let snapshot = RepoSnapshot::new(4, "feature-x", "deadbe");
/// assert_eq!(compose(&base, &snapshot, "dev"), "1.2.3-beta.dev.4+feature-x.deadbe");
/// ```
pub fn compose(base: &Version, snapshot: &RepoSnapshot, distance_label: &str) -> String {
    let mut composed = format!("{}.{}.{}", base.major(), base.minor(), base.patch());

    let pre_release = match (base.pre_release(), snapshot.commits_since_tag) {
        (Some(pre), 0) => Some(pre.to_string()),
        (None, 0) => None,
        (Some(pre), n) => Some(format!("{}.{}.{}", pre, distance_label, n)),
        (None, n) => Some(format!("{}.{}", distance_label, n)),
    };
    if let Some(pre) = pre_release {
        composed.push('-');
        composed.push_str(&pre);
    }

    composed.push('+');
    if let Some(meta) = base.build_metadata() {
        composed.push_str(meta);
        composed.push('.');
    }
    composed.push_str(&snapshot.branch_component());
    composed.push('.');
    composed.push_str(&snapshot.short_hash);

    composed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_compose_clean_tag_on_branch() {
        let snapshot = RepoSnapshot::new(0, "main", "abc123");
        assert_eq!(compose(&base("1.2.3"), &snapshot, "dev"), "1.2.3+main.abc123");
    }

    #[test]
    fn test_compose_appends_distance_to_pre_release() {
        let snapshot = RepoSnapshot::new(4, "feature-x", "deadbe");
        assert_eq!(
            compose(&base("1.2.3-beta"), &snapshot, "dev"),
            "1.2.3-beta.dev.4+feature-x.deadbe"
        );
    }

    #[test]
    fn test_compose_creates_pre_release_for_distance() {
        let snapshot = RepoSnapshot::new(2, "main", "cafe01");
        assert_eq!(
            compose(&base("1.2.3+build5"), &snapshot, "dev"),
            "1.2.3-dev.2+build5.main.cafe01"
        );
    }

    #[test]
    fn test_compose_keeps_pre_release_at_zero_distance() {
        let snapshot = RepoSnapshot::new(0, "main", "abc123");
        assert_eq!(
            compose(&base("2.0.0-rc.1"), &snapshot, "dev"),
            "2.0.0-rc.1+main.abc123"
        );
    }

    #[test]
    fn test_compose_custom_distance_label() {
        let snapshot = RepoSnapshot::new(7, "main", "abc123");
        assert_eq!(
            compose(&base("1.0.0"), &snapshot, "post"),
            "1.0.0-post.7+main.abc123"
        );
    }

    #[test]
    fn test_compose_sanitizes_branch() {
        let snapshot = RepoSnapshot::new(1, "feature/login_form", "abc123");
        assert_eq!(
            compose(&base("1.0.0"), &snapshot, "dev"),
            "1.0.0-dev.1+feature-login-form.abc123"
        );
    }

    #[test]
    fn test_compose_output_re_parses() {
        let cases = vec![
            (base("1.2.3"), RepoSnapshot::new(0, "main", "abc123")),
            (base("1.2.3-beta"), RepoSnapshot::new(4, "feature/x", "deadbe")),
            (base("1.2.3+build5"), RepoSnapshot::new(2, "release-1.x", "cafe01")),
        ];

        for (version, snapshot) in cases {
            let composed = compose(&version, &snapshot, "dev");
            assert!(
                Version::parse(&composed).is_ok(),
                "composed string '{}' should satisfy the grammar",
                composed
            );
        }
    }

    #[test]
    fn test_compose_is_deterministic_and_borrows() {
        let version = base("1.2.3-beta");
        let snapshot = RepoSnapshot::new(4, "main", "abc123");
        let first = compose(&version, &snapshot, "dev");
        let second = compose(&version, &snapshot, "dev");
        assert_eq!(first, second);
        // The base is untouched by composition
        assert_eq!(version, base("1.2.3-beta"));
    }
}
