//! Configuration module for Ferrous Dig
//!
//! - `root`: Main configuration and CLI overrides
//! - `query`: Lookup defaults (timeout, server, record type)
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod query;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use query::QueryConfig;
pub use root::{CliOverrides, Config};
