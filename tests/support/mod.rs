use std::sync::Once;

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber for the test process, once.
///
/// Silent unless `RUST_LOG` is set, e.g. `RUST_LOG=debug cargo test -- --nocapture`.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
