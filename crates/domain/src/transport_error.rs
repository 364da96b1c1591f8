use std::time::Duration;
use thiserror::Error;

/// Raw failure raised while exchanging a message with a DNS server.
///
/// These are never shown to the user directly; they are turned into a
/// [`DigError`](crate::DigError) by [`network_failure`](crate::network_failure)
/// and kept as its cause.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("i/o timeout: no response from {server} within {}ms", .timeout.as_millis())]
    Timeout { server: String, timeout: Duration },

    #[error("{operation} {server}: {source}")]
    Io {
        operation: &'static str,
        server: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid server address: {0}")]
    InvalidAddress(String),

    #[error("failed to encode query: {0}")]
    Encode(String),

    #[error("malformed response from {server}: {reason}")]
    Malformed { server: String, reason: String },
}

impl TransportError {
    pub fn io(operation: &'static str, server: impl Into<String>, source: std::io::Error) -> Self {
        TransportError::Io {
            operation,
            server: server.into(),
            source,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout { .. })
    }
}
