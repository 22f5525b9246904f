//! Tracing initialization for binaries and integration tests.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Reads `RUST_LOG` for the filter, defaulting to `info`. Safe to call
/// more than once — later calls are no-ops, which keeps test suites
/// that all call it from panicking over the global default.
///
/// Session tokens never appear in spans or events; the core logs
/// structured fields (room code, player id, counts) only.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
