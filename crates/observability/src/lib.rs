//! Process-wide tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// Defaults to `info` and is overridable via `RUST_LOG` (set
/// `RUST_LOG=coinbank_ledger=debug` to watch every coin move). Safe to call
/// multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with_default_filter("info");
}

/// Initialize tracing with an explicit fallback filter directive.
///
/// `RUST_LOG` still wins when set. Useful in tests that want debug output
/// without touching the environment.
pub fn init_with_default_filter(directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
