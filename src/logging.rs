use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. Verbosity comes from `RUST_LOG`
/// (default `warn`); progress output on stdout is unaffected.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
