use std::fmt;

/// Warnings that occur at the boundaries of a release run.
/// These are non-fatal conditions that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release has been published yet; the bootstrap tag is used
    NoPriorRelease { fallback_tag: String },
    /// The window since the latest release contains no commits
    NoNewCommits { since_tag: String },
    /// Bootstrap path could not read the triggering event payload
    MissingEventPayload { reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorRelease { fallback_tag } => {
                write!(
                    f,
                    "There were no releases published before, using tag {}",
                    fallback_tag
                )
            }
            BoundaryWarning::NoNewCommits { since_tag } => {
                write!(f, "No new commits since release '{}'", since_tag)
            }
            BoundaryWarning::MissingEventPayload { reason } => {
                write!(f, "Cannot read event payload: {}", reason)
            }
        }
    }
}
