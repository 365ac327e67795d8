//! Transport error types

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while sending a request to the daemon.
///
/// These describe failures below the HTTP status line: the request never
/// produced a response. A response with an error status is not a
/// `TransportError`; interpreting it is the client's job.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request/response error
    #[error("HTTP error: {0}")]
    Http(String),

    /// The daemon could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout error
    #[error("Timeout")]
    Timeout,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic transport error
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether the daemon could not be reached at all.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
