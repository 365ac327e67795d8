//! HTTP request builder

use super::{QueryParams, Response};
use crate::error::Result;
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata};
use engine_transport::{HttpRequest, Transport};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::sync::Arc;
use url::Url;

/// Builder for one daemon request.
///
/// Created by the client with the path already resolved; resources add the
/// query and send it. Sending issues exactly one request through the
/// client's transport.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    transport: Arc<dyn Transport>,
    method: Method,
    url: Url,
    headers: HeaderMap,
    query: QueryParams,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub(crate) fn new(transport: Arc<dyn Transport>, method: Method, url: Url) -> Self {
        Self {
            transport,
            method,
            url,
            headers: HeaderMap::new(),
            query: QueryParams::new(),
        }
    }

    /// Set the query parameters, replacing any set before.
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Set a header.
    pub fn header(mut self, key: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Set every header in `headers`, overriding existing values.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (key, value) in headers {
            self.headers.insert(key.clone(), value.clone());
        }
        self
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The URL that will be sent, query string included.
    pub fn url(&self) -> Url {
        let mut url = self.url.clone();
        if self.query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.query.encode()));
        }
        url
    }

    /// Send the request and get a response.
    ///
    /// Any HTTP status is returned as a `Response`; only a failure to deliver
    /// the request is an error here.
    pub async fn send(self) -> Result<Response> {
        let url = self.url();
        let metadata = RequestMetadata::new(self.method.as_str(), url.path())
            .with_query(url.query().unwrap_or_default());
        metadata.log_request();

        let request = HttpRequest {
            method: self.method,
            url: url.clone(),
            headers: self.headers,
            body: None,
        };

        let timer = RequestTimer::start();
        let response = match self.transport.send_http(request).await {
            Ok(response) => response,
            Err(err) => {
                metadata.log_transport_error(&err, timer.elapsed());
                return Err(err.into());
            }
        };
        let elapsed = timer.elapsed();

        ResponseMetadata::new(response.status, elapsed)
            .with_body_size(response.body.len())
            .log(&metadata);

        Ok(Response::new(response, url, elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_transport::{HttpResponse, MockTransport};

    fn builder(transport: MockTransport) -> RequestBuilder {
        RequestBuilder::new(
            Arc::new(transport),
            Method::DELETE,
            Url::parse("http://localhost:2375/containers/abc").unwrap(),
        )
    }

    #[test]
    fn test_url_without_query() {
        let builder = builder(MockTransport::new(|_| Ok(HttpResponse::ok())));
        assert_eq!(builder.url().as_str(), "http://localhost:2375/containers/abc");
    }

    #[test]
    fn test_url_with_query() {
        let builder = builder(MockTransport::new(|_| Ok(HttpResponse::ok())))
            .query(QueryParams::new().flag("v", true).flag("force", false));
        assert_eq!(
            builder.url().as_str(),
            "http://localhost:2375/containers/abc?v=1"
        );
    }

    #[tokio::test]
    async fn test_send_passes_headers_and_sends_once() {
        let transport = MockTransport::new(|req| {
            assert_eq!(req.method, Method::DELETE);
            assert_eq!(
                req.headers.get("x-test").and_then(|v| v.to_str().ok()),
                Some("yes")
            );
            assert!(req.body.is_none());
            Ok(HttpResponse::with_status(500, "Server error"))
        });

        let response = builder(transport.clone())
            .header(
                HeaderName::from_static("x-test"),
                HeaderValue::from_static("yes"),
            )
            .send()
            .await
            .unwrap();

        assert_eq!(response.status().as_u16(), 500);
        assert_eq!(transport.calls(), 1);
    }
}
