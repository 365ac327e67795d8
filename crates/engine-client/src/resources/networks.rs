//! Networks API endpoint

use super::{Resource, require_id};
use crate::{client::Client, error::Result, http::Method};
use tracing::instrument;

/// Networks API resource.
#[derive(Clone, Debug)]
pub struct Networks {
    client: Client,
}

impl Networks {
    /// Create a new Networks resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Remove a network.
    #[instrument(skip(self))]
    pub async fn remove(&self, network_id: &str) -> Result<()> {
        require_id("network", network_id)?;

        self.client
            .request(Method::DELETE, &["networks", network_id])?
            .send()
            .await?
            .empty_result()
    }
}

impl Resource for Networks {
    fn client(&self) -> &Client {
        &self.client
    }
}
