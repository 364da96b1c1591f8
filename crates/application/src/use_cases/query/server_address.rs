use ferrous_dig_domain::validators::{validate_port, validate_server_address};
use ferrous_dig_domain::{DigError, DEFAULT_DNS_PORT};
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServerAddressError {
    #[error("address {0}: missing port in address")]
    MissingPort(String),

    #[error("address {0}: missing ']' in address")]
    MissingBracket(String),

    #[error("address {0}: too many colons in address")]
    TooManyColons(String),

    #[error("address {0}: unexpected bracket in address")]
    UnexpectedBracket(String),
}

/// Split `host:port` or `[host]:port` into its parts.
pub fn split_host_port(address: &str) -> Result<(&str, &str), ServerAddressError> {
    if let Some(rest) = address.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| ServerAddressError::MissingBracket(address.to_string()))?;
        let host = &rest[..end];
        let port = rest[end + 1..]
            .strip_prefix(':')
            .ok_or_else(|| ServerAddressError::MissingPort(address.to_string()))?;

        if port.contains(['[', ']']) {
            return Err(ServerAddressError::UnexpectedBracket(address.to_string()));
        }
        return Ok((host, port));
    }

    let (host, port) = address
        .rsplit_once(':')
        .ok_or_else(|| ServerAddressError::MissingPort(address.to_string()))?;

    if host.contains(':') {
        return Err(ServerAddressError::TooManyColons(address.to_string()));
    }
    if address.contains(['[', ']']) {
        return Err(ServerAddressError::UnexpectedBracket(address.to_string()));
    }

    Ok((host, port))
}

/// Normalize a user-supplied server into `host:port`.
///
/// Accepted shapes:
/// - `[2001:db8::1]:53` / `8.8.8.8:5353` rebuilt from the parsed address
/// - `8.8.8.8` / `2001:db8::1` get port 53, IPv6 wrapped in brackets
///
/// The output always parses as a [`SocketAddr`], so `[8.8.8.8]:53`
/// comes back as `8.8.8.8:53`.
pub fn normalize_server(server: &str) -> Result<String, DigError> {
    let is_ip_literal = IpAddr::from_str(server).is_ok();

    if server.starts_with('[') && server.contains("]:") {
        Ok(validate_split(server)?.to_string())
    } else if !server.contains(':') || is_ip_literal {
        validate_server_address(server)?;
        if server.contains(':') {
            Ok(format!("[{}]:{}", server, DEFAULT_DNS_PORT))
        } else {
            Ok(format!("{}:{}", server, DEFAULT_DNS_PORT))
        }
    } else {
        Ok(validate_split(server)?.to_string())
    }
}

fn validate_split(server: &str) -> Result<SocketAddr, DigError> {
    let (host, port) = split_host_port(server).map_err(|e| {
        DigError::input_with_cause(format!("invalid DNS server format: {}", server), e)
    })?;
    let ip = validate_server_address(host)?;
    let port = validate_port(port)?;
    Ok(SocketAddr::new(ip, port))
}
