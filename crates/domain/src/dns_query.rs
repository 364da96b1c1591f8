use super::RecordType;
use std::sync::Arc;

/// DNS query (domain + record type) as it goes on the wire.
#[derive(Debug, Clone)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Domain with the trailing root dot, as sent in the question section.
    pub fn fqdn(&self) -> String {
        if self.domain.ends_with('.') {
            self.domain.to_string()
        } else {
            format!("{}.", self.domain)
        }
    }
}
