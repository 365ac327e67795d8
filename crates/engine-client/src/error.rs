//! Error types for the engine client
//!
//! Two kinds matter to callers: the daemon answered with an error status
//! (`Error::Daemon`), or the request never got an answer (`Error::Transport`).
//! The remaining variants cover local validation and decoding.

use engine_transport::TransportError;
use thiserror::Error;

/// Result type alias for operations that can fail with an engine client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the engine client.
#[derive(Debug, Error)]
pub enum Error {
    /// The daemon answered with a non-2xx status and an error message.
    #[error("Error response from daemon: {message}")]
    Daemon {
        /// HTTP status code
        status: u16,
        /// Message reported by the daemon
        message: String,
    },

    /// The daemon answered with a non-2xx status and nothing in the body.
    ///
    /// This usually means the route does not exist for the negotiated API
    /// version.
    #[error(
        "Error: request returned {reason} for API route and version {url}, check if the server supports the requested API version"
    )]
    EmptyErrorResponse {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Request URL
        url: String,
    },

    /// The request could not be delivered.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Invalid request parameters, rejected before anything is sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid daemon URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Daemon address uses a scheme this client cannot dial.
    #[error("Unsupported protocol scheme: {0}")]
    UnsupportedProtocol(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failed to decode a successful daemon response.
    #[error("Failed to parse daemon response: {0}")]
    ResponseValidation(String),
}

impl Error {
    /// Build the error for a non-2xx response.
    ///
    /// The message is the `message` field of a JSON error body when there is
    /// one, otherwise the body text with surrounding whitespace trimmed.
    pub fn from_response(status: u16, reason: &str, body: &[u8], url: &str) -> Self {
        match daemon_message(body) {
            Some(message) => Error::Daemon { status, message },
            None => Error::EmptyErrorResponse {
                status,
                reason: reason.to_string(),
                url: url.to_string(),
            },
        }
    }

    /// HTTP status of a daemon error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Daemon { status, .. } | Error::EmptyErrorResponse { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Whether the daemon reported that the object does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether the daemon could not be reached at all.
    pub fn is_connection_failed(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_connection())
    }
}

#[derive(Debug, serde::Deserialize)]
struct DaemonErrorBody {
    message: String,
}

fn daemon_message(body: &[u8]) -> Option<String> {
    if let Ok(parsed) = serde_json::from_slice::<DaemonErrorBody>(body) {
        let message = parsed.message.trim();
        return (!message.is_empty()).then(|| message.to_string());
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const URL: &str = "http://localhost:2375/containers/abc";

    #[test]
    fn test_plain_text_body() {
        let err = Error::from_response(500, "Internal Server Error", b"Server error", URL);
        assert_eq!(err.to_string(), "Error response from daemon: Server error");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_plain_text_body_is_trimmed() {
        let err = Error::from_response(409, "Conflict", b"  in use\n", URL);
        assert_eq!(err.to_string(), "Error response from daemon: in use");
    }

    #[test]
    fn test_json_message_field() {
        let err = Error::from_response(
            404,
            "Not Found",
            br#"{"message":"No such container: abc"}"#,
            URL,
        );
        assert_eq!(
            err.to_string(),
            "Error response from daemon: No such container: abc"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_json_falls_back_to_raw_text() {
        let err = Error::from_response(500, "Internal Server Error", br#"{"message": 42"#, URL);
        assert_eq!(
            err.to_string(),
            r#"Error response from daemon: {"message": 42"#
        );
    }

    #[test]
    fn test_json_without_message_falls_back_to_raw_text() {
        let err = Error::from_response(500, "Internal Server Error", br#"{"error":"x"}"#, URL);
        assert_eq!(err.to_string(), r#"Error response from daemon: {"error":"x"}"#);
    }

    #[test]
    fn test_empty_body() {
        let err = Error::from_response(404, "Not Found", b"", URL);
        assert_eq!(
            err.to_string(),
            "Error: request returned Not Found for API route and version http://localhost:2375/containers/abc, check if the server supports the requested API version"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_blank_json_message_counts_as_empty_body() {
        for body in [&br#"{"message":""}"#[..], &br#"{"message":"  "}"#[..]] {
            let err = Error::from_response(500, "Internal Server Error", body, URL);
            assert!(matches!(err, Error::EmptyErrorResponse { status: 500, .. }));
            assert!(err.to_string().contains("Internal Server Error"));
        }
    }

    #[test]
    fn test_transport_error_is_transparent() {
        let err: Error = TransportError::Connection("connection refused".into()).into();
        assert_eq!(err.to_string(), "Connection error: connection refused");
        assert!(err.is_connection_failed());
        assert_eq!(err.status(), None);
    }
}
