//! Domain logic - pure version rules independent of git operations

pub mod compose;
pub mod snapshot;
pub mod tag;
pub mod version;

pub use compose::compose;
pub use snapshot::RepoSnapshot;
pub use tag::Tag;
pub use version::{is_valid_pre_release, Version};
