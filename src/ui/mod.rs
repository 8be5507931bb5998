//! User-facing status lines.
//!
//! Everything printed for a human reading the CI log goes through here;
//! developer diagnostics go through `tracing` instead (see [crate::logging]).

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_release_plan,
    display_status, display_success,
};
