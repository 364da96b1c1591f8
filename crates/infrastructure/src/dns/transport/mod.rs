pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use ferrous_dig_domain::TransportError;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format). Empty if the server sent an
    /// empty datagram.
    pub bytes: Bytes,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Trait for sending raw DNS messages over the wire.
///
/// Transports do not bound their own waiting; the caller wraps the whole
/// exchange in a single deadline.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(&self, message_bytes: &[u8]) -> Result<TransportResponse, TransportError>;

    fn protocol_name(&self) -> &'static str;
}

/// Transaction ID of a wire-format message, if it is long enough to have one.
pub(crate) fn message_id(bytes: &[u8]) -> Option<u16> {
    match bytes {
        [hi, lo, ..] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}
