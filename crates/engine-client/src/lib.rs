//! # engine-client
//!
//! Async Rust client for a container engine's REST API:
//! - Container removal and lifecycle actions (kill, stop, restart, pause, rename)
//! - Image, volume and network removal
//! - Daemon ping and version
//! - Pluggable transport, so tests never need a daemon
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use engine_client::{Client, ContainerRemoveOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     client
//!         .containers()
//!         .remove(
//!             ContainerRemoveOptions::new("container_id")
//!                 .remove_volumes(true)
//!                 .force(true),
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Testing without a daemon
//!
//! ```rust
//! use engine_client::{Client, ContainerRemoveOptions};
//! use engine_client::transport::mock::{MockTransport, error_mock};
//!
//! # tokio_test::block_on(async {
//! let client = Client::builder()
//!     .transport(MockTransport::new(error_mock(500, "Server error")))
//!     .build()
//!     .unwrap();
//!
//! let err = client
//!     .containers()
//!     .remove(ContainerRemoveOptions::new("container_id"))
//!     .await
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "Error response from daemon: Server error");
//! # });
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;
pub use engine_transport::{self as transport, Transport, TransportError};

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
