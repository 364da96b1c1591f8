use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lookup defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Exchange timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// DNS server to ask when none is given on the command line.
    /// Unset means the system resolver (falling back to 8.8.8.8:53).
    #[serde(default)]
    pub server: Option<String>,

    /// Record type used when `-t` is not given (default: "A")
    #[serde(default = "default_record_type")]
    pub record_type: String,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            server: None,
            record_type: default_record_type(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_record_type() -> String {
    "A".to_string()
}
