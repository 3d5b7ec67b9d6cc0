//! Shared setup for the integration tests.
use tracing_subscriber::EnvFilter;

/// Route harness logs through the test writer. Set `RUST_LOG=debug`
/// to see each law's verdict.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
