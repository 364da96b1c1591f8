use ferrous_dig_domain::{DigError, DnsResponse, RecordType, ResponseStatus};

/// Map a non-success response code to a DNS error.
///
/// Returns `None` for NOERROR.
pub fn status_error(status: ResponseStatus, domain: &str, server: &str) -> Option<DigError> {
    let message = match status {
        ResponseStatus::NoError => return None,
        ResponseStatus::NXDomain => format!("domain '{}' not found (NXDOMAIN)", domain),
        ResponseStatus::ServFail => "DNS server experienced an internal failure".to_string(),
        ResponseStatus::Refused => "DNS server refused the query".to_string(),
        ResponseStatus::NotImp => "DNS server does not support this query type".to_string(),
        ResponseStatus::FormErr => "DNS query format error".to_string(),
        ResponseStatus::Other(code) => format!("DNS query failed with response code {}", code),
    };

    Some(DigError::dns(message, domain, server))
}

/// Render every answer of the wanted type, in server order.
///
/// Answers of other types (a CNAME preceding the A records it points to,
/// for instance) are skipped.
pub fn extract_records(response: &DnsResponse, wanted: RecordType) -> Vec<String> {
    response
        .answers
        .iter()
        .filter_map(|answer| answer.data.value_for(wanted))
        .collect()
}
