use super::RecordType;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Payload of one answer-section resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    MX { preference: u16, exchange: String },
    CNAME(String),
    /// Character-string segments in wire order.
    TXT(Vec<String>),
    /// Any other type, kept only by its wire number.
    Other(u16),
}

impl AnswerData {
    /// Text value of this record if it is of the requested type.
    pub fn value_for(&self, wanted: RecordType) -> Option<String> {
        match (self, wanted) {
            (AnswerData::A(addr), RecordType::A) => Some(addr.to_string()),
            (AnswerData::AAAA(addr), RecordType::AAAA) => Some(addr.to_string()),
            (
                AnswerData::MX {
                    preference,
                    exchange,
                },
                RecordType::MX,
            ) => Some(format!("{} {}", preference, exchange)),
            (AnswerData::CNAME(target), RecordType::CNAME) => Some(target.clone()),
            (AnswerData::TXT(segments), RecordType::TXT) => Some(segments.join(" ")),
            _ => None,
        }
    }
}

/// Answer-section resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub name: String,
    pub ttl: u32,
    pub data: AnswerData,
}

impl AnswerRecord {
    pub fn new(name: impl Into<String>, ttl: u32, data: AnswerData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data,
        }
    }
}
