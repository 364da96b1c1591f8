use ferrous_dig_domain::{AnswerData, AnswerRecord, DnsResponse, ResponseStatus, TransportError};
use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a wire-format reply into the domain response.
    pub fn parse(response_bytes: &[u8], server: &str) -> Result<DnsResponse, TransportError> {
        let message = Message::from_vec(response_bytes).map_err(|e| TransportError::Malformed {
            server: server.to_string(),
            reason: e.to_string(),
        })?;

        let status = ResponseStatus::from_code(u16::from(message.response_code()));
        let truncated = message.truncated();

        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::answer).collect();

        debug!(
            id = message.id(),
            rcode = %status,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id: message.id(),
            status,
            truncated,
            answers,
        })
    }

    fn answer(record: &Record) -> AnswerRecord {
        let data = match record.data() {
            RData::A(a) => AnswerData::A(a.0),
            RData::AAAA(aaaa) => AnswerData::AAAA(aaaa.0),
            RData::CNAME(canonical) => AnswerData::CNAME(canonical.to_utf8()),
            RData::MX(mx) => AnswerData::MX {
                preference: mx.preference(),
                exchange: mx.exchange().to_utf8(),
            },
            RData::TXT(txt) => AnswerData::TXT(
                txt.txt_data()
                    .iter()
                    .map(|segment| Self::txt_segment(segment))
                    .collect(),
            ),
            _ => AnswerData::Other(u16::from(record.record_type())),
        };

        AnswerRecord::new(record.name().to_utf8(), record.ttl(), data)
    }

    /// Character-string as text. Control characters and bytes that are not
    /// UTF-8 are written as `\DDD` (decimal), the zone-file escape.
    fn txt_segment(segment: &[u8]) -> String {
        let mut text = String::with_capacity(segment.len());
        let mut escaped = 0usize;

        for chunk in segment.utf8_chunks() {
            for c in chunk.valid().chars() {
                if c.is_ascii_control() {
                    text.push_str(&format!("\\{:03}", c as u8));
                    escaped += 1;
                } else {
                    text.push(c);
                }
            }
            for byte in chunk.invalid() {
                text.push_str(&format!("\\{:03}", byte));
                escaped += 1;
            }
        }

        if escaped > 0 {
            debug!(
                escaped_bytes = escaped,
                segment_len = segment.len(),
                "TXT segment has non-printable bytes, escaped as \\DDD"
            );
        }

        text
    }
}
