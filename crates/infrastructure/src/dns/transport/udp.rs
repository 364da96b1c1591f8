use super::{message_id, DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dig_domain::TransportError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport, one socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind_addr(&self) -> SocketAddr {
        if self.server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        }
    }

    fn io_error(&self, operation: &'static str, source: std::io::Error) -> TransportError {
        TransportError::io(operation, self.server_addr.to_string(), source)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message_bytes: &[u8]) -> Result<TransportResponse, TransportError> {
        let socket = UdpSocket::bind(self.bind_addr())
            .await
            .map_err(|e| self.io_error("bind udp", e))?;

        // Connected so ICMP port-unreachable surfaces as ECONNREFUSED on recv.
        socket
            .connect(self.server_addr)
            .await
            .map_err(|e| self.io_error("dial udp", e))?;

        let bytes_sent = socket
            .send(message_bytes)
            .await
            .map_err(|e| self.io_error("write udp", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let expected_id = message_id(message_bytes);
        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let bytes_received = socket
                .recv(&mut recv_buf)
                .await
                .map_err(|e| self.io_error("read udp", e))?;

            let received = &recv_buf[..bytes_received];
            let received_id = message_id(received);

            if received_id.is_some() && received_id != expected_id {
                warn!(
                    server = %self.server_addr,
                    expected_id = ?expected_id,
                    received_id = ?received_id,
                    "Ignoring UDP response with mismatched ID"
                );
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );

            return Ok(TransportResponse {
                bytes: Bytes::copy_from_slice(received),
                protocol_used: self.protocol_name(),
            });
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
