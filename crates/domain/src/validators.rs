use crate::dns_record::RecordType;
use crate::errors::DigError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

fn is_domain_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'
}

/// Validate a domain name before it is put on the wire.
///
/// Checks run in a fixed order and the first violation is returned.
pub fn validate_domain(domain: &str) -> Result<(), DigError> {
    if domain.is_empty() {
        return Err(DigError::input("domain name cannot be empty"));
    }

    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(DigError::input(format!(
            "domain name too long ({} characters, max {})",
            domain.len(),
            MAX_DOMAIN_LENGTH
        )));
    }

    if let Some((index, c)) = domain.char_indices().find(|(_, c)| !is_domain_char(*c)) {
        return Err(DigError::input(format!(
            "domain contains invalid character '{}' at position {}",
            c,
            index + 1
        )));
    }

    if domain.contains("..") {
        return Err(DigError::input("domain cannot contain consecutive dots"));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(DigError::input("domain cannot start or end with a dot"));
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return Err(DigError::input("domain cannot start or end with a hyphen"));
    }
    if domain.ends_with('_') {
        return Err(DigError::input("domain cannot end with an underscore"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    for (i, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return Err(DigError::input("domain cannot have empty labels"));
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(DigError::input(format!(
                "domain label '{}' too long ({} characters, max {})",
                label,
                label.len(),
                MAX_LABEL_LENGTH
            )));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(DigError::input(format!(
                "domain label '{}' cannot start or end with hyphen",
                label
            )));
        }
        if label.ends_with('_') {
            return Err(DigError::input(format!(
                "domain label '{}' cannot end with underscore",
                label
            )));
        }

        let is_tld = i == labels.len() - 1;
        if is_tld && label.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DigError::input("top-level domain cannot be all numeric"));
        }
    }

    Ok(())
}

/// Validate a record type name, case-insensitively.
///
/// Returns the parsed type so callers never have to match on the raw string again.
pub fn validate_record_type(record_type: &str) -> Result<RecordType, DigError> {
    if record_type.is_empty() {
        return Err(DigError::input("record type cannot be empty"));
    }

    RecordType::from_str(record_type).map_err(|_| {
        DigError::input(format!(
            "unsupported record type '{}' (supported: {})",
            record_type.to_uppercase(),
            RecordType::supported_list()
        ))
    })
}

/// Validate a DNS server host. Only IP literals are accepted.
pub fn validate_server_address(server: &str) -> Result<IpAddr, DigError> {
    if server.is_empty() {
        return Err(DigError::input("DNS server cannot be empty"));
    }

    let ip = IpAddr::from_str(server)
        .map_err(|_| DigError::input(format!("'{}' is not a valid IP address", server)))?;

    // IPv4-mapped addresses are judged by their IPv4 form
    let canonical = ip.to_canonical();
    let allowed_loopback =
        canonical == IpAddr::V4(Ipv4Addr::LOCALHOST) || canonical == IpAddr::V6(Ipv6Addr::LOCALHOST);

    if canonical.is_loopback() && !allowed_loopback {
        return Err(DigError::input(
            "loopback addresses other than 127.0.0.1 or ::1 are not recommended for DNS",
        ));
    }

    Ok(ip)
}

/// Validate a DNS server port given as text.
pub fn validate_port(port: &str) -> Result<u16, DigError> {
    if port.is_empty() {
        return Err(DigError::input("DNS server port cannot be empty"));
    }

    let out_of_range =
        || DigError::input(format!("DNS server port '{}' is out of range (1-65535)", port));

    let mut value: u32 = 0;
    for c in port.chars() {
        let digit = c.to_digit(10).ok_or_else(|| {
            DigError::input(format!("DNS server port '{}' must be numeric", port))
        })?;
        value = value * 10 + digit;
        if value > u16::MAX as u32 {
            return Err(out_of_range());
        }
    }

    match u16::try_from(value) {
        Ok(0) | Err(_) => Err(out_of_range()),
        Ok(value) => Ok(value),
    }
}
