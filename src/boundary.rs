use std::fmt;

/// Warnings for conditions at the edges of repository history.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag exists at the requested reference depth, so the candidate
    /// passed without a monotonicity comparison
    NoReferenceTag { depth: usize },
    /// HEAD is not on a branch, so the branch component degrades to "HEAD"
    DetachedHead { short_hash: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReferenceTag { depth } => {
                write!(
                    f,
                    "No reference tag at depth {}; candidate accepted without comparison",
                    depth
                )
            }
            BoundaryWarning::DetachedHead { short_hash } => {
                write!(
                    f,
                    "HEAD is detached at {}; using 'HEAD' as the branch component",
                    short_hash
                )
            }
        }
    }
}
