use crate::errors::DigError;
use std::time::Duration;

/// Outcome of one lookup, returned on success and on failure alike.
///
/// `error` is set exactly when `records` is empty.
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Domain exactly as the caller gave it.
    pub domain: String,
    /// Record type exactly as the caller gave it (casing preserved).
    pub record_type: String,
    /// One entry per matching answer record, in server order.
    pub records: Vec<String>,
    /// Normalized `host:port` contacted, or attempted.
    pub server: String,
    /// Time spent in the network exchange. Zero if no exchange happened.
    pub query_time: Duration,
    pub error: Option<DigError>,
}

impl QueryResult {
    pub fn new(domain: &str, record_type: &str, server: &str) -> Self {
        Self {
            domain: domain.to_string(),
            record_type: record_type.to_string(),
            records: Vec::new(),
            server: server.to_string(),
            query_time: Duration::ZERO,
            error: None,
        }
    }

    /// Mark the lookup as failed. Any partial records are dropped.
    pub fn fail(&mut self, error: DigError) -> DigError {
        self.records.clear();
        self.error = Some(error.clone());
        error
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none() && !self.records.is_empty()
    }

    pub fn into_result(self) -> Result<QueryResult, DigError> {
        match self.error.clone() {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}
