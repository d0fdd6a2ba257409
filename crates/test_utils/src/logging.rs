//! Test logging setup

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
});

/// Initializes tracing for tests, once per process
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_test_logging() {
    Lazy::force(&INIT);
}
