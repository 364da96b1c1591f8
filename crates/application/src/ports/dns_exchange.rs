use async_trait::async_trait;
use ferrous_dig_domain::{DnsQuery, DnsResponse, TransportError};
use std::time::Duration;

/// One query/response round trip with a DNS server.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    /// Send `query` to `server` (`host:port`) and wait at most `timeout` for the reply.
    ///
    /// `Ok(None)` means the server answered without a usable message.
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: &str,
        timeout: Duration,
    ) -> Result<Option<DnsResponse>, TransportError>;
}
