//! Log subscriber setup

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RENTAL_LOG";

const DEFAULT_FILTER: &str = "error";

/// Install the stderr subscriber
///
/// Reads the filter from `RENTAL_LOG`, e.g. `RENTAL_LOG=rental=debug`.
/// Stdout is left to command output.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be set when embedded; keep that one
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
