use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "DEVKIT_LOG";
const DEFAULT_FILTER: &str = "info";

/// Installs the stderr subscriber. `DEVKIT_LOG` takes any `EnvFilter`
/// directive; an invalid one falls back to `info`.
pub(crate) fn init() {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
