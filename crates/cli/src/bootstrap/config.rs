use ferrous_dig_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Summarize the effective configuration. Call once logging is up.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    debug!(
        config_file = config_path.unwrap_or("default"),
        timeout_ms = config.query.timeout_ms,
        server = config.query.server.as_deref().unwrap_or("system"),
        record_type = %config.query.record_type,
        log_level = %config.logging.level,
        "Configuration loaded"
    );
}
