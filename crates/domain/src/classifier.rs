//! Network failure classification.
//!
//! Transport errors come from several layers (tokio sockets, the OS,
//! our own timeout handling) and only share their textual description,
//! so classification matches on the lowercased message.

use crate::errors::{Cause, DigError};
use std::error::Error as StdError;

const GENERIC_FAILURE: &str = "Network error occurred while contacting DNS server";

/// Known failure texts, checked in order. First match wins.
const FAILURE_PATTERNS: &[(&[&str], &str)] = &[
    (
        &["timeout", "deadline exceeded"],
        "DNS server timeout - server may be unreachable or overloaded",
    ),
    (
        &["connection refused"],
        "DNS server refused connection - server may be down or not accepting queries",
    ),
    (
        &["no such host"],
        "DNS server hostname could not be resolved",
    ),
    (
        &["network unreachable", "network is unreachable"],
        "Network unreachable - check your internet connection",
    ),
    (
        &["permission denied"],
        "Permission denied - may need elevated privileges",
    ),
];

/// Turn a transport failure into a Network error carrying it as cause.
pub fn network_failure<E>(failure: E, server: &str) -> DigError
where
    E: StdError + Send + Sync + 'static,
{
    let text = failure.to_string().to_lowercase();

    let message = FAILURE_PATTERNS
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle)))
        .map(|(_, message)| *message)
        .unwrap_or(GENERIC_FAILURE);

    DigError::network(message, Some(Cause::new(failure)), server)
}

/// Classify an optional failure; `None` passes straight through.
pub fn classify_network_failure<E>(failure: Option<E>, server: &str) -> Option<DigError>
where
    E: StdError + Send + Sync + 'static,
{
    failure.map(|failure| network_failure(failure, server))
}
