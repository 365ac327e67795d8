//! Transport abstraction layer for the container engine client
//!
//! Every request the client makes goes through a `Transport`, so the network
//! stack is an explicit dependency rather than ambient state.
//!
//! # Architecture
//!
//! - **Transport trait**: one operation, send a request and get a response or error
//! - **HTTP transport**: daemon API over TCP via reqwest
//! - **Mock transport**: closure-backed interceptor for tests
//!
//! # Usage
//!
//! ```no_run
//! use engine_transport::{HttpRequest, HttpTransport, Transport};
//! use http::Method;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new()?;
//! let url = Url::parse("http://localhost:2375/_ping")?;
//! let response = transport.send_http(HttpRequest::new(Method::GET, url)).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod http;
pub mod mock;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use crate::http::{HttpTransport, HttpTransportConfig};
pub use mock::{MockTransport, error_mock};
pub use traits::{HttpRequest, HttpResponse, Transport};
