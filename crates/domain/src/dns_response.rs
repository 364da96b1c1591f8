use crate::dns_record::AnswerRecord;
use std::fmt;

/// Response code (RCODE) of a DNS reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseStatus {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => ResponseStatus::NoError,
            1 => ResponseStatus::FormErr,
            2 => ResponseStatus::ServFail,
            3 => ResponseStatus::NXDomain,
            4 => ResponseStatus::NotImp,
            5 => ResponseStatus::Refused,
            other => ResponseStatus::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::NoError => 0,
            ResponseStatus::FormErr => 1,
            ResponseStatus::ServFail => 2,
            ResponseStatus::NXDomain => 3,
            ResponseStatus::NotImp => 4,
            ResponseStatus::Refused => 5,
            ResponseStatus::Other(code) => *code,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::NoError => "NOERROR",
            ResponseStatus::FormErr => "FORMERR",
            ResponseStatus::ServFail => "SERVFAIL",
            ResponseStatus::NXDomain => "NXDOMAIN",
            ResponseStatus::NotImp => "NOTIMP",
            ResponseStatus::Refused => "REFUSED",
            ResponseStatus::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoded reply to a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsResponse {
    pub id: u16,
    pub status: ResponseStatus,
    pub truncated: bool,
    /// Answer section in server order.
    pub answers: Vec<AnswerRecord>,
}

impl DnsResponse {
    pub fn new(id: u16, status: ResponseStatus, answers: Vec<AnswerRecord>) -> Self {
        Self {
            id,
            status,
            truncated: false,
            answers,
        }
    }
}
