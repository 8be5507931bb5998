//! Source control abstraction layer
//!
//! The release workflow only needs a handful of repository operations: list
//! tags, list commits since a tag, create a tag and push it. They are grouped
//! behind the [SourceControl] trait so the workflow can run against a real
//! repository or an in-memory one.
//!
//! - [repository::Git2Repository]: implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use semver_action::git::SourceControl;
//! # fn example<S: SourceControl>(scm: &S) -> semver_action::Result<()> {
//! let commits = scm.commits_since(Some("v1.2.3"))?;
//! for commit in commits {
//!     println!("{}: {}", commit.id, commit.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

pub use crate::domain::RawCommit;
use crate::error::Result;

/// Repository operations needed by the release workflow
///
/// Implementations map underlying errors (like `git2::Error`) onto
/// [crate::error::ReleaseError] variants.
pub trait SourceControl {
    /// Whether the local clone has truncated history
    ///
    /// Version detection needs every tag and commit, so a shallow clone is
    /// reported to the user as a configuration problem.
    fn is_shallow(&self) -> Result<bool>;

    /// All tag names in the repository, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commits reachable from HEAD but not from `tag`, newest first
    ///
    /// # Arguments
    /// * `tag` - Tag to stop at (exclusive); `None` walks the whole history
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>>;

    /// Create a lightweight tag pointing at HEAD
    ///
    /// # Returns
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a single tag to a remote
    ///
    /// # Arguments
    /// * `remote` - Name of the remote (e.g., "origin")
    /// * `name` - Tag to push
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
