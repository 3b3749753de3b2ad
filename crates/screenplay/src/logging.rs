//! Log output for scenarios.
//!
//! The library only emits `tracing` events. Binaries and test suites that
//! want to see them install a subscriber here.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, checked before `RUST_LOG`
pub const ENV_LOG: &str = "SCREENPLAY_LOG";

fn env_filter(default_directive: &str) -> EnvFilter {
    std::env::var(ENV_LOG)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Install a fmt subscriber writing to stderr.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install a subscriber whose output is captured by the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("screenplay=debug"))
        .with_test_writer()
        .try_init()
        .is_ok()
}
