use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber for the CLI.
///
/// Verbosity follows `RUST_LOG` (for example `RUST_LOG=profile_settings=debug`) and
/// defaults to `warn`. Output goes to stderr so command output stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
