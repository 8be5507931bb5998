use std::fmt;

/// Non-fatal conditions met while deciding a release.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits since the latest version tag
    NoNewCommits { latest_tag: Option<String> },
    /// Commits exist but none of them implies a version change
    NoBumpingCommits { commit_count: usize },
    /// Tags carry the configured prefix but are not valid versions
    UnparsableTags { tags: Vec<String>, prefix: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { latest_tag } => match latest_tag {
                Some(tag) => write!(f, "No new commits since tag '{}'", tag),
                None => write!(f, "No commits found in repository history"),
            },
            BoundaryWarning::NoBumpingCommits { commit_count } => {
                write!(
                    f,
                    "None of the {} commit(s) require a version bump",
                    commit_count
                )
            }
            BoundaryWarning::UnparsableTags { tags, prefix } => {
                write!(
                    f,
                    "Ignoring {} tag(s) with prefix '{}' that are not versions: {}",
                    tags.len(),
                    prefix,
                    tags.join(", ")
                )
            }
        }
    }
}
