//! In-process transport for tests
//!
//! `MockTransport` hands every request to a closure instead of the network.
//! The closure either returns a canned response or inspects the request and
//! fails with a description of what was wrong with it.
//!
//! ```
//! use engine_transport::mock::{MockTransport, error_mock};
//!
//! let transport = MockTransport::new(error_mock(500, "Server error"));
//! assert_eq!(transport.calls(), 0);
//! ```

use crate::error::Result;
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type Handler = dyn Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync;

/// Transport that answers requests from a handler closure.
#[derive(Clone)]
pub struct MockTransport {
    handler: Arc<Handler>,
    calls: Arc<AtomicUsize>,
}

impl MockTransport {
    /// Wrap a handler closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of requests the handler has seen.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.handler)(&request)
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Handler that ignores the request and answers `status` with `message` as
/// a plain-text body.
pub fn error_mock(
    status: u16,
    message: impl Into<String>,
) -> impl Fn(&HttpRequest) -> Result<HttpResponse> + Send + Sync + 'static {
    let message = message.into();
    move |_: &HttpRequest| Ok(HttpResponse::with_status(status, message.clone().into_bytes()))
}
