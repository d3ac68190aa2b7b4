//! Resolution engine deriving and validating versions from repository state

pub mod version_resolver;

pub use version_resolver::{ResolvedVersion, Validated, VersionResolver};
