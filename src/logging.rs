//! Diagnostic tracing for debugging a release run.
//!
//! User-facing progress goes through [crate::ui]; this is developer output
//! controlled by `RUST_LOG` and written to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn` if unset.
///
/// ```bash
/// RUST_LOG=semver_action=debug semver-action --dry-run
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
