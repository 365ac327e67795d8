//! HTTP request construction and response interpretation
//!
//! Resources build requests here and turn responses into results. Delivery
//! itself is delegated to the client's `Transport`.

pub use query::QueryParams;
pub use request::RequestBuilder;
pub use response::Response;

mod query;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
