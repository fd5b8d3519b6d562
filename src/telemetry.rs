//! Log output for the service binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber: human-readable lines on stderr,
/// filtered by `RUST_LOG` (default `info`).
///
/// Calling it twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
