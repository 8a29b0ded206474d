use crate::http::TransportError;

/// Errors returned by client operations.
///
/// Each variant that concerns a remote call names the operation (`"search"`,
/// `"collection"`, ...) so callers can report it without digging further.
#[derive(Debug, thiserror::Error)]
pub enum BggError {
    /// The HTTP exchange itself failed (network, DNS, TLS, timeout).
    #[error("{operation}: HTTP request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// The server answered with a status the operation does not accept.
    #[error("{operation}: unexpected status {status}")]
    Status {
        operation: &'static str,
        status: StatusText,
    },

    /// The server answered with an error envelope instead of data.
    #[error("{operation}: error from upstream: {message:?}")]
    Upstream {
        operation: &'static str,
        message: String,
    },

    /// The body could not be decoded into the expected shape.
    #[error("{operation}: decoding response failed: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// The operation needs a logged-in session.
    #[error("{operation}: not logged in, call login first")]
    NotLoggedIn { operation: &'static str },

    /// The caller cancelled the operation.
    #[error("{operation}: cancelled")]
    Cancelled { operation: &'static str },

    /// Options failed validation before any request was made.
    #[error("{operation}: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BggError {
    pub fn decode(operation: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Decode {
            operation,
            message: message.to_string(),
        }
    }

    pub fn upstream(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Upstream {
            operation,
            message: message.into(),
        }
    }

    pub fn invalid(operation: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            message: message.into(),
        }
    }

    pub fn status(operation: &'static str, code: u16) -> Self {
        Self::Status {
            operation,
            status: StatusText(code),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// HTTP status of a `Status` error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(status.0),
            _ => None,
        }
    }
}

/// A status code that displays as `"404 Not Found"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusText(pub u16);

impl std::fmt::Display for StatusText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = reqwest::StatusCode::from_u16(self.0)
            .ok()
            .and_then(|s| s.canonical_reason());
        match reason {
            Some(reason) => write!(f, "\"{} {}\"", self.0, reason),
            None => write!(f, "\"{}\"", self.0),
        }
    }
}
