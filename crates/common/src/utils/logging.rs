use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default directives when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,service=debug,sea_orm=warn,sqlx=warn";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize a compact human-readable subscriber writing to stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to [`DEFAULT_FILTER`]
/// - Safe to call more than once; later calls are no-ops
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize a JSON subscriber for machine-parsed logs.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize a subscriber for tests; output is captured by the test harness.
pub fn init_logging_test() {
    let _ = fmt()
        .with_env_filter(env_filter("debug,sqlx=warn"))
        .with_test_writer()
        .try_init();
}
