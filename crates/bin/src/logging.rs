//! Logging init: structured logs to stderr, stdout stays free for results.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,edgarcheck=info";

/// Initialize logging to stderr. `verbose` forces debug output for edgarcheck
/// crates regardless of `RUST_LOG`.
pub(crate) fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("info,edgarcheck=debug,edgarcheck_data=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
