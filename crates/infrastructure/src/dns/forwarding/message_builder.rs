//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_dig_domain::{DnsQuery, TransportError};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and return its ID alongside the wire bytes.
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single IN-class question for the fully-qualified name
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), TransportError> {
        let fqdn = query.fqdn();
        let name = Name::from_str(&fqdn)
            .map_err(|e| TransportError::Encode(format!("invalid name '{}': {}", fqdn, e)))?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, TransportError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| TransportError::Encode(e.to_string()))?;

        Ok(buf)
    }
}
