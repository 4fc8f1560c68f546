//! Tracing subscriber setup for binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the process entry point.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the filter, e.g. `RUST_LOG=chess_rules=debug`.
pub const LOG_ENV_VAR: &str = "RUST_LOG";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// `default_directive` when the variable is unset or invalid.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
