//! Logging setup shared by all binaries
//!
//! Diagnostics go to stderr through `tracing`; stdout is reserved for the
//! console report each program prints.

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the global subscriber.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .try_init()
        .is_ok();

    if installed {
        debug!(
            version = crate::VERSION,
            git_hash = crate::GIT_HASH,
            "logging initialized"
        );
    }
}
