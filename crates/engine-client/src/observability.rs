//! Structured logging for daemon requests
//!
//! Every request the client sends is logged through this layer, so resource
//! methods stay free of logging boilerplate.

use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, DELETE, etc.)
    pub method: String,
    /// Request path
    pub path: String,
    /// Encoded query string, empty when there is none
    pub query: String,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: String::new(),
        }
    }

    /// Set the encoded query string
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            query = %self.query,
            "Sending request to daemon"
        );
    }

    /// Log a request that never got a response
    pub fn log_transport_error(&self, error: &dyn std::error::Error, elapsed: Duration) {
        warn!(
            method = %self.method,
            path = %self.path,
            elapsed_ms = elapsed.as_millis(),
            error = %error,
            "Daemon request could not be delivered"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code
    pub status: u16,
    /// Response body size in bytes
    pub body_size: usize,
    /// Time elapsed for the request
    pub elapsed: Duration,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: u16, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: 0,
            elapsed,
        }
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = size;
        self
    }

    /// Log the response at a level matching its status
    pub fn log(&self, request: &RequestMetadata) {
        if (200..300).contains(&self.status) {
            debug!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "Daemon request succeeded"
            );
        } else {
            warn!(
                method = %request.method,
                path = %request.path,
                status = self.status,
                elapsed_ms = self.elapsed.as_millis(),
                body_size = self.body_size,
                "Daemon returned an error status"
            );
        }
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
