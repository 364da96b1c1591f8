#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for crate::DigError {
    fn from(err: ConfigError) -> Self {
        crate::DigError::input_with_cause("invalid configuration", err)
    }
}
