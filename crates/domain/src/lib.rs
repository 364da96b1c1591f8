//! Ferrous Dig Domain Layer
pub mod classifier;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod dns_response;
pub mod errors;
pub mod query_result;
pub mod transport_error;
pub mod validators;

pub use classifier::{classify_network_failure, network_failure};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerData, AnswerRecord, RecordType};
pub use dns_response::{DnsResponse, ResponseStatus};
pub use errors::{Cause, DigError, ErrorKind};
pub use query_result::QueryResult;
pub use transport_error::TransportError;

/// Port appended to server addresses given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// Server used when no server is given and the system resolver is unknown.
pub const FALLBACK_DNS_SERVER: &str = "8.8.8.8:53";
