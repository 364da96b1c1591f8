use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{DnsTransport, TcpTransport, TransportResponse, UdpTransport};
use async_trait::async_trait;
use ferrous_dig_application::ports::DnsExchange;
use ferrous_dig_domain::{DnsQuery, DnsResponse, TransportError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// Exchanges queries with a real server over UDP, retrying over TCP
/// when the UDP answer is truncated.
///
/// The configured timeout bounds the whole exchange, TCP retry included.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireExchange;

impl WireExchange {
    pub fn new() -> Self {
        Self
    }

    async fn round_trip(
        &self,
        server_addr: SocketAddr,
        server: &str,
        id: u16,
        message_bytes: &[u8],
    ) -> Result<Option<DnsResponse>, TransportError> {
        let udp = UdpTransport::new(server_addr);
        let reply = udp.send(message_bytes).await?;

        let response = match Self::decode(reply, server, id)? {
            Some(response) if response.truncated => response,
            other => return Ok(other),
        };

        debug!(
            server = %server,
            answers = response.answers.len(),
            "UDP response truncated, retrying over TCP"
        );

        let tcp = TcpTransport::new(server_addr);
        let reply = tcp.send(message_bytes).await?;
        Self::decode(reply, server, id)
    }

    fn decode(
        reply: TransportResponse,
        server: &str,
        id: u16,
    ) -> Result<Option<DnsResponse>, TransportError> {
        if reply.bytes.is_empty() {
            debug!(
                server = %server,
                protocol = reply.protocol_used,
                "Empty reply from DNS server"
            );
            return Ok(None);
        }

        let response = ResponseParser::parse(&reply.bytes, server)?;
        if response.id != id {
            return Err(TransportError::Malformed {
                server: server.to_string(),
                reason: format!("response ID {} does not match query ID {}", response.id, id),
            });
        }

        Ok(Some(response))
    }
}

#[async_trait]
impl DnsExchange for WireExchange {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: &str,
        timeout: Duration,
    ) -> Result<Option<DnsResponse>, TransportError> {
        let server_addr: SocketAddr = server
            .parse()
            .map_err(|_| TransportError::InvalidAddress(server.to_string()))?;

        let (id, message_bytes) = MessageBuilder::build_query(query)?;

        match tokio::time::timeout(
            timeout,
            self.round_trip(server_addr, server, id, &message_bytes),
        )
        .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                debug!(
                    server = %server,
                    timeout_ms = timeout.as_millis() as u64,
                    "DNS exchange timed out"
                );
                Err(TransportError::Timeout {
                    server: server.to_string(),
                    timeout,
                })
            }
        }
    }
}
