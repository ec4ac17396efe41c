//! Test logging setup

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
///
/// Safe to call from every test; only the first call installs the
/// subscriber. Honours `RUST_LOG`, defaulting to `debug` for workspace
/// crates.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("domain_records=debug,core_kernel=debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}
