use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dig_domain::TransportError;
use std::io;
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport, used when a UDP reply comes back truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn io_error(&self, operation: &'static str, source: io::Error) -> TransportError {
        TransportError::io(operation, self.server_addr.to_string(), source)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(&self, message_bytes: &[u8]) -> Result<TransportResponse, TransportError> {
        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| self.io_error("dial tcp", e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| self.io_error("dial tcp", e))?;

        send_with_length_prefix(&mut stream, message_bytes)
            .await
            .map_err(|e| self.io_error("write tcp", e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes = read_with_length_prefix(&mut stream)
            .await
            .map_err(|e| self.io_error("read tcp", e))?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: Bytes::from(response_bytes),
            protocol_used: self.protocol_name(),
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("message too large: {} bytes", message_bytes.len()),
        )
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response).await?;

    Ok(response)
}
