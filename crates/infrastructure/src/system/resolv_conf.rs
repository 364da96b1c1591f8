use async_trait::async_trait;
use ferrous_dig_application::ports::ResolverDiscovery;
use ferrous_dig_domain::{DigError, DEFAULT_DNS_PORT};
use std::net::IpAddr;
use std::str::FromStr;
use tokio::fs;
use tracing::debug;

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

/// POSIX resolver discovery (reads /etc/resolv.conf)
pub struct ResolvConfDiscovery {
    path: String,
}

impl ResolvConfDiscovery {
    pub fn new() -> Self {
        Self {
            path: RESOLV_CONF_PATH.to_string(),
        }
    }

    /// Create a discovery reading a custom resolv.conf path (useful for testing)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ResolvConfDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

/// First usable `nameserver` entry as `host:53`.
fn first_nameserver(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && !line.starts_with(';'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some("nameserver"), Some(value)) => Some(value),
                _ => None,
            }
        })
        .find_map(|value| {
            // fe80::1%eth0
            let host = value.split('%').next().unwrap_or(value);
            match IpAddr::from_str(host).ok()? {
                IpAddr::V4(v4) => Some(format!("{}:{}", v4, DEFAULT_DNS_PORT)),
                IpAddr::V6(v6) => Some(format!("[{}]:{}", v6, DEFAULT_DNS_PORT)),
            }
        })
}

#[async_trait]
impl ResolverDiscovery for ResolvConfDiscovery {
    async fn discover(&self) -> Result<String, DigError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DigError::system_with_cause(format!("failed to read {}", self.path), e)
        })?;

        let server = first_nameserver(&content).ok_or_else(|| {
            DigError::system(format!("no usable nameserver found in {}", self.path))
        })?;

        debug!(path = %self.path, server = %server, "System resolver discovered");
        Ok(server)
    }
}

/// Discovery for platforms without a resolver file; always fails so the
/// caller falls back to its default server.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableDiscovery;

#[async_trait]
impl ResolverDiscovery for UnavailableDiscovery {
    async fn discover(&self) -> Result<String, DigError> {
        Err(DigError::system(
            "system resolver discovery is not supported on this platform",
        ))
    }
}
