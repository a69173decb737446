//! Logging infrastructure for siteinsight
//!
//! Diagnostics go to stderr so stdout stays clean for `--json` and `--html`.
//! `RUST_LOG` wins over the level picked from the command line.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Level used when `RUST_LOG` is unset
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "siteinsight=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Initialize the logging system
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose, quiet)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

/// Initialize logging for tests (captured by the test harness)
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
