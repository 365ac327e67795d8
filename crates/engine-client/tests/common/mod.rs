//! Common test utilities and helpers

use engine_client::Client;
use engine_client::transport::{HttpRequest, HttpResponse, MockTransport, TransportError};

/// Install a test-writer subscriber once so `RUST_LOG` shows request logs.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Client that sends through `transport` with default configuration.
#[allow(dead_code)]
pub fn mock_client(transport: MockTransport) -> Client {
    Client::builder()
        .transport(transport)
        .build()
        .expect("Failed to build client")
}

/// Client pointed at a wiremock server over the real HTTP transport.
#[allow(dead_code)]
pub fn http_client(uri: &str) -> Client {
    init_tracing();
    Client::builder()
        .host(uri)
        .build()
        .expect("Failed to build client")
}

/// Fail the request with a description, the way an assertion mock reports a mismatch.
#[allow(dead_code)]
pub fn mismatch(msg: String) -> Result<HttpResponse, TransportError> {
    Err(TransportError::Other(msg))
}

/// Assert a query key is absent, returning a mismatch error otherwise.
#[allow(dead_code)]
pub fn expect_absent(req: &HttpRequest, key: &str) -> Result<(), TransportError> {
    match req.query_param(key) {
        None => Ok(()),
        Some(value) => Err(TransportError::Other(format!(
            "{key} should not be present in query, got {value}"
        ))),
    }
}
