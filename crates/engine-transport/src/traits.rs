//! Transport trait and the request/response values it exchanges
//!
//! Defines the `Transport` capability that the client sends every request
//! through, so the network stack can be swapped for an interceptor in tests.

use crate::error::Result;
use async_trait::async_trait;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use std::fmt;
use url::Url;

/// HTTP request specification
///
/// Represents a fully-resolved HTTP request to be sent via a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, DELETE, etc.)
    pub method: Method,

    /// Request URL, including the query string
    pub url: Url,

    /// Request headers
    pub headers: HeaderMap,

    /// Request body (optional)
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a new HTTP request
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header to the request
    pub fn with_header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Request path without the query string
    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// First value of a query parameter, if present
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }
}

/// HTTP response
///
/// The body is read to completion by the transport before this value is
/// built, so holding an `HttpResponse` never pins a connection.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    pub headers: HeaderMap,

    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a new HTTP response
    pub fn new(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// An empty `200 OK` response
    pub fn ok() -> Self {
        Self::with_status(200, Vec::new())
    }

    /// A response with the given status and body and no headers
    pub fn with_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, HeaderMap::new(), body.into())
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Canonical reason phrase for the status, e.g. "Not Found"
    pub fn reason(&self) -> &'static str {
        StatusCode::from_u16(self.status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown Status")
    }

    /// Get the response body as a string, replacing invalid UTF-8
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse response body as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the response body cannot be parsed as valid JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Get a header value by name (case-insensitive)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A component that sends one HTTP request and returns one response or error.
///
/// Implementations must not interpret the status code: a `500` is a
/// successful round trip from the transport's point of view.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send an HTTP request and receive a response
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Short name of the transport, for logging
    fn name(&self) -> &'static str;
}
