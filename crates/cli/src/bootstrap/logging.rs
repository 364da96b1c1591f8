use ferrous_dig_domain::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; stdout is the report.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let level = config.logging.level.to_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", level);
    }
}
