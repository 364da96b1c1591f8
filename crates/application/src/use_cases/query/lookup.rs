use super::interpret::{extract_records, status_error};
use super::server_address::normalize_server;
use crate::ports::{DnsExchange, ResolverDiscovery};
use ferrous_dig_domain::validators::{validate_domain, validate_record_type};
use ferrous_dig_domain::{
    network_failure, DigError, DnsQuery, QueryResult, RecordType, FALLBACK_DNS_SERVER,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Use case: run one DNS lookup end to end.
///
/// Validates the input, resolves the server, performs exactly one exchange
/// and turns the response into display strings. Every call returns a
/// [`QueryResult`]; on failure its `error` is set and `records` is empty.
pub struct QueryUseCase {
    exchange: Arc<dyn DnsExchange>,
    discovery: Arc<dyn ResolverDiscovery>,
    timeout: Duration,
}

impl QueryUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, discovery: Arc<dyn ResolverDiscovery>) -> Self {
        Self {
            exchange,
            discovery,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn query(&self, domain: &str, record_type: &str, server: &str) -> QueryResult {
        let mut result = QueryResult::new(domain, record_type, server);

        if let Err(e) = validate_domain(domain) {
            result.fail(e.with_domain(domain));
            return result;
        }

        let wanted = match validate_record_type(record_type) {
            Ok(wanted) => wanted,
            Err(e) => {
                result.fail(e);
                return result;
            }
        };

        let server = if server.is_empty() {
            self.default_server().await
        } else {
            match normalize_server(server) {
                Ok(server) => server,
                Err(e) => {
                    result.fail(e);
                    return result;
                }
            }
        };
        result.server = server;

        match self.lookup(domain, wanted, &result.server, &mut result.query_time).await {
            Ok(records) => result.records = records,
            Err(e) => {
                result.fail(e);
            }
        }

        result
    }

    async fn lookup(
        &self,
        domain: &str,
        wanted: RecordType,
        server: &str,
        elapsed: &mut Duration,
    ) -> Result<Vec<String>, DigError> {
        let query = DnsQuery::new(domain, wanted);

        debug!(
            domain = %domain,
            record_type = %wanted,
            server = %server,
            timeout_ms = self.timeout.as_millis() as u64,
            "Sending DNS query"
        );

        let started = Instant::now();
        let outcome = self.exchange.exchange(&query, server, self.timeout).await;
        *elapsed = started.elapsed();

        let response = match outcome {
            Ok(Some(response)) => response,
            Ok(None) => {
                return Err(DigError::network(
                    "no response received from DNS server",
                    None,
                    server,
                ))
            }
            Err(e) => {
                debug!(server = %server, error = %e, "DNS exchange failed");
                return Err(network_failure(e, server));
            }
        };

        debug!(
            server = %server,
            status = %response.status,
            answers = response.answers.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "DNS response received"
        );

        if let Some(e) = status_error(response.status, domain, server) {
            return Err(e);
        }

        let records = extract_records(&response, wanted);
        if records.is_empty() {
            return Err(DigError::dns(
                format!("no {} records found for domain '{}'", wanted, domain),
                domain,
                server,
            ));
        }

        Ok(records)
    }

    async fn default_server(&self) -> String {
        match self.discovery.discover().await {
            Ok(server) if !server.is_empty() => {
                debug!(server = %server, "Using system resolver");
                server
            }
            Ok(_) => {
                debug!(fallback = FALLBACK_DNS_SERVER, "System resolver list is empty");
                FALLBACK_DNS_SERVER.to_string()
            }
            Err(e) => {
                debug!(
                    error = %e,
                    fallback = FALLBACK_DNS_SERVER,
                    "System resolver unavailable"
                );
                FALLBACK_DNS_SERVER.to_string()
            }
        }
    }
}
