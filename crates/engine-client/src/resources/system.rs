//! Daemon-level endpoints

use super::Resource;
use crate::{client::Client, error::Result, http::Method, types::Version};
use tracing::instrument;

/// System API resource.
#[derive(Clone, Debug)]
pub struct System {
    client: Client,
}

impl System {
    /// Create a new System resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Check that the daemon is reachable. Returns the body, normally `OK`.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<String> {
        self.client
            .request(Method::GET, &["_ping"])?
            .send()
            .await?
            .text_result()
    }

    /// Version information about the daemon.
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<Version> {
        self.client
            .request(Method::GET, &["version"])?
            .send()
            .await?
            .parse_result()
    }
}

impl Resource for System {
    fn client(&self) -> &Client {
        &self.client
    }
}
