//! API resource endpoints
//!
//! This module contains the implementation of the engine endpoints,
//! organized by object type.

pub mod containers;
pub mod images;
pub mod networks;
pub mod system;
pub mod volumes;

pub use containers::Containers;
pub use images::Images;
pub use networks::Networks;
pub use system::System;
pub use volumes::Volumes;

use crate::client::Client;
use crate::error::{Error, Result};

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

/// Reject an empty object identifier before anything is sent.
pub(crate) fn require_id(kind: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::InvalidRequest(format!("{kind} ID must not be empty")));
    }
    Ok(())
}
