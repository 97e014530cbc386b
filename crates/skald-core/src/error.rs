//! Error types for the skald client.

use thiserror::Error;

/// A shared error type for every client operation.
///
/// Domain operations return exactly one of these; callers render the
/// `Display` output verbatim, so every variant carries a message that is
/// already fit for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkaldError {
    /// An operation that requires a session was called without one.
    /// Raised locally, before any network I/O.
    #[error("{0}")]
    Unauthenticated(String),

    /// The server answered with a non-2xx status. The message comes from the
    /// API's structured error body when it has one, otherwise from the
    /// calling operation's fallback text.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success-coded response whose body was not the expected
    /// `{ "data": ... }` envelope.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// The request never produced a response (connection refused, DNS
    /// failure, connection reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The bounded request timeout elapsed before a response arrived.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Input rejected before submission (empty credentials and the like).
    #[error("{0}")]
    Validation(String),

    /// Reading or writing the local session record failed.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// Client construction or configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SkaldError {
    /// Creates an Unauthenticated error with an operation-specific message.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Creates an Api error from a status code and extracted message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a MalformedResponse error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Creates a Network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout(message.into())
    }

    /// Creates a Validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an Unauthenticated error.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated(_))
    }

    /// Check if this is an Api error.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a MalformedResponse error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }

    /// Check if this error means the server was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Returns the HTTP status for Api errors, None otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A type alias for `Result<T, SkaldError>`.
pub type Result<T> = std::result::Result<T, SkaldError>;
