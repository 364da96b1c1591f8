use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::query::QueryConfig;

const LOCAL_CONFIG_FILE: &str = "ferrous-dig.toml";
const MAX_TIMEOUT_MS: u64 = 60_000;

/// Main configuration structure for Ferrous Dig
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Lookup defaults
    #[serde(default)]
    pub query: QueryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-dig.toml in current directory
    /// 3. $HOME/.config/ferrous-dig/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => match Self::discover_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Get the path to the configuration file that would be used
    pub fn discover_config_path() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        let home = std::env::var_os("HOME")?;
        let user = PathBuf::from(home)
            .join(".config")
            .join("ferrous-dig")
            .join("config.toml");
        user.exists().then_some(user)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.query.timeout_ms = timeout_ms;
        }
        if let Some(server) = overrides.server {
            self.query.server = Some(server);
        }
        if let Some(record_type) = overrides.record_type {
            self.query.record_type = record_type;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.query.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "query timeout cannot be 0".to_string(),
            ));
        }

        if self.query.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::Validation(format!(
                "query timeout {}ms exceeds maximum of {}ms",
                self.query.timeout_ms, MAX_TIMEOUT_MS
            )));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub timeout_ms: Option<u64>,
    pub server: Option<String>,
    pub record_type: Option<String>,
    pub log_level: Option<String>,
}
