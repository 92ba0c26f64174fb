//! Tracing setup for the suites.

/// Install the global subscriber. `RUST_LOG` controls the filter; the
/// default is `info`. Safe to call from every test, only the first call
/// takes effect.
pub fn init() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();
}
