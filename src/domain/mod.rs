//! Domain logic - pure release rules independent of git, config and output

pub mod bump;
pub mod commit;
pub mod version;

pub use bump::{determine_bump, BumpLevel};
pub use commit::{parse_commits, Footer, ParsedCommit, RawCommit};
pub use version::{latest_version, Version};
