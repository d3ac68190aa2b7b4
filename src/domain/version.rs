use crate::error::{GitSemverError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Anchored validation pattern recommended by semver.org. Build metadata is
/// its own optional group introduced by '+', so a pre-release never swallows
/// a metadata section and vice versa.
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<major>0|[1-9]\d*)",
        r"\.(?P<minor>0|[1-9]\d*)",
        r"\.(?P<patch>0|[1-9]\d*)",
        r"(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .expect("version grammar pattern is valid")
});

/// The pre-release section on its own: dot-separated identifiers, numeric
/// ones without leading zeros.
static PRE_RELEASE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*$",
    ))
    .expect("pre-release pattern is valid")
});

/// Check a string against the pre-release section of the grammar
///
/// Used for values that are spliced into composed pre-release sections,
/// such as the configured distance label.
pub fn is_valid_pre_release(input: &str) -> bool {
    PRE_RELEASE_PATTERN.is_match(input)
}

/// Semantic version representation
///
/// Fields are only set through [`Version::new`] or [`Version::parse`], so a
/// constructed value always satisfies the grammar: numeric components carry
/// no leading zeros, pre-release and build metadata are either absent or
/// non-empty dot-separated identifier lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

impl Version {
    /// Create a bare version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Parse a version string against the full grammar
    ///
    /// The match is anchored: the entire input must be a version, with no
    /// surrounding whitespace or tag prefix. Anything else is reported as
    /// [`GitSemverError::MalformedVersion`].
    pub fn parse(input: &str) -> Result<Self> {
        let captures = VERSION_PATTERN
            .captures(input)
            .ok_or_else(|| GitSemverError::malformed(input))?;

        // The pattern guarantees plain digits, so parsing only fails when a
        // component overflows u64. That still makes the whole input invalid.
        let major = captures["major"]
            .parse()
            .map_err(|_| GitSemverError::malformed(input))?;
        let minor = captures["minor"]
            .parse()
            .map_err(|_| GitSemverError::malformed(input))?;
        let patch = captures["patch"]
            .parse()
            .map_err(|_| GitSemverError::malformed(input))?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release: captures.name("prerelease").map(|m| m.as_str().to_string()),
            build_metadata: captures
                .name("buildmetadata")
                .map(|m| m.as_str().to_string()),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release identifiers after the '-', if any
    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    /// Build metadata identifiers after the '+', if any
    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Compare release precedence: major, then minor, then patch, numerically
    ///
    /// The first unequal component decides. Pre-release and build metadata
    /// never participate, so `1.2.3-beta` and `1.2.3+build7` both compare
    /// equal to `1.2.3`.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(meta) = &self.build_metadata {
            write!(f, "+{}", meta)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
