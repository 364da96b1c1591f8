use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure category of a [`DigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Network,
    Dns,
    System,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "Input",
            ErrorKind::Network => "Network",
            ErrorKind::Dns => "DNS",
            ErrorKind::System => "System",
        }
    }

    /// Process exit code for this kind of failure.
    ///
    /// - 1: invalid input
    /// - 2: network or DNS failure
    /// - 3: system failure
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorKind::Input => 1,
            ErrorKind::Network | ErrorKind::Dns => 2,
            ErrorKind::System => 3,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Shared handle to the failure that triggered a [`DigError`].
///
/// Held behind an `Arc` so the error stays cheap to clone into a
/// [`QueryResult`](crate::QueryResult) while still being returned to the caller.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync>);

impl Cause {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Downcast the wrapped failure.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

#[derive(Error, Debug, Clone)]
pub enum DigError {
    #[error("Input error: {message}{}", caused_by(.cause))]
    Input {
        message: String,
        #[source]
        cause: Option<Cause>,
        domain: Option<String>,
    },

    #[error("Network error: {message}{}", caused_by(.cause))]
    Network {
        message: String,
        #[source]
        cause: Option<Cause>,
        server: Option<String>,
    },

    #[error("DNS error: {message}{}", caused_by(.cause))]
    Dns {
        message: String,
        #[source]
        cause: Option<Cause>,
        domain: Option<String>,
        server: Option<String>,
    },

    #[error("System error: {message}{}", caused_by(.cause))]
    System {
        message: String,
        #[source]
        cause: Option<Cause>,
    },
}

fn caused_by(cause: &Option<Cause>) -> String {
    match cause {
        Some(cause) => format!(" (caused by: {})", cause),
        None => String::new(),
    }
}

impl DigError {
    pub fn input(message: impl Into<String>) -> Self {
        DigError::Input {
            message: message.into(),
            cause: None,
            domain: None,
        }
    }

    pub fn input_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        DigError::Input {
            message: message.into(),
            cause: Some(Cause::new(cause)),
            domain: None,
        }
    }

    pub fn network(message: impl Into<String>, cause: Option<Cause>, server: &str) -> Self {
        DigError::Network {
            message: message.into(),
            cause,
            server: non_empty(server),
        }
    }

    pub fn dns(message: impl Into<String>, domain: &str, server: &str) -> Self {
        DigError::Dns {
            message: message.into(),
            cause: None,
            domain: non_empty(domain),
            server: non_empty(server),
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        DigError::System {
            message: message.into(),
            cause: None,
        }
    }

    pub fn system_with_cause<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        DigError::System {
            message: message.into(),
            cause: Some(Cause::new(cause)),
        }
    }

    /// Attach the queried domain to an input error.
    pub fn with_domain(mut self, value: &str) -> Self {
        match &mut self {
            DigError::Input { domain, .. } | DigError::Dns { domain, .. } => {
                *domain = non_empty(value);
            }
            DigError::Network { .. } | DigError::System { .. } => {}
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DigError::Input { .. } => ErrorKind::Input,
            DigError::Network { .. } => ErrorKind::Network,
            DigError::Dns { .. } => ErrorKind::Dns,
            DigError::System { .. } => ErrorKind::System,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DigError::Input { message, .. }
            | DigError::Network { message, .. }
            | DigError::Dns { message, .. }
            | DigError::System { message, .. } => message,
        }
    }

    pub fn cause(&self) -> Option<&Cause> {
        match self {
            DigError::Input { cause, .. }
            | DigError::Network { cause, .. }
            | DigError::Dns { cause, .. }
            | DigError::System { cause, .. } => cause.as_ref(),
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            DigError::Input { domain, .. } | DigError::Dns { domain, .. } => domain.as_deref(),
            DigError::Network { .. } | DigError::System { .. } => None,
        }
    }

    pub fn server(&self) -> Option<&str> {
        match self {
            DigError::Network { server, .. } | DigError::Dns { server, .. } => server.as_deref(),
            DigError::Input { .. } | DigError::System { .. } => None,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
