//! HTTP response handling

use crate::error::{Error, Result};
use engine_transport::HttpResponse;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// A daemon response together with the request it answers.
///
/// The body has already been read in full by the transport.
#[derive(Debug)]
pub struct Response {
    inner: HttpResponse,
    url: Url,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(inner: HttpResponse, url: Url, elapsed: Duration) -> Self {
        Self {
            inner,
            url,
            elapsed,
        }
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.inner.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.inner.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.inner.body
    }

    /// URL the request was sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Time from sending the request to having the full body.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.inner.is_success()
    }

    /// Turn a non-2xx response into the matching [`Error`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::from_response(
                self.inner.status,
                self.inner.reason(),
                &self.inner.body,
                self.url.as_str(),
            ))
        }
    }

    /// Succeed with `()` on 2xx, discarding the body.
    pub fn empty_result(self) -> Result<()> {
        self.into_result().map(drop)
    }

    /// Succeed with the body as text on 2xx.
    pub fn text_result(self) -> Result<String> {
        self.into_result().map(|r| r.inner.text())
    }

    /// Parse a successful response body as JSON.
    ///
    /// Error statuses are converted first, so a daemon error never surfaces
    /// as a decoding failure.
    pub fn parse_result<T: DeserializeOwned>(self) -> Result<T> {
        let response = self.into_result()?;
        serde_json::from_slice(response.body()).map_err(|e| {
            Error::ResponseValidation(format!("{} {}: {}", response.status(), response.url, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn response(status: u16, body: &str) -> Response {
        Response::new(
            HttpResponse::with_status(status, body),
            Url::parse("http://localhost:2375/containers/abc").unwrap(),
            Duration::from_millis(3),
        )
    }

    #[test]
    fn test_empty_result_discards_body() {
        assert!(response(200, "").empty_result().is_ok());
        assert!(response(204, "ignored").empty_result().is_ok());
    }

    #[test]
    fn test_error_status_becomes_daemon_error() {
        let err = response(500, "Server error").empty_result().unwrap_err();
        assert_eq!(err.to_string(), "Error response from daemon: Server error");
    }

    #[test]
    fn test_parse_result() {
        #[derive(Debug, serde::Deserialize)]
        struct Body {
            #[serde(rename = "Id")]
            id: String,
        }

        let body: Body = response(200, r#"{"Id":"abc"}"#).parse_result().unwrap();
        assert_eq!(body.id, "abc");

        assert_matches!(
            response(200, "not json").parse_result::<Body>(),
            Err(Error::ResponseValidation(_))
        );
        assert_matches!(
            response(404, r#"{"message":"No such container: abc"}"#).parse_result::<Body>(),
            Err(Error::Daemon { status: 404, .. })
        );
    }

    #[test]
    fn test_text_result() {
        assert_eq!(response(200, "OK").text_result().unwrap(), "OK");
    }
}
