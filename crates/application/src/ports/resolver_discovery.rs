use async_trait::async_trait;
use ferrous_dig_domain::DigError;

/// Finds the DNS server the operating system is configured to use.
#[async_trait]
pub trait ResolverDiscovery: Send + Sync {
    /// Returns the server as a normalized `host:port`, or fails.
    async fn discover(&self) -> Result<String, DigError>;
}
