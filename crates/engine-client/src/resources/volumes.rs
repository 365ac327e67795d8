//! Volumes API endpoint

use super::{Resource, require_id};
use crate::{
    client::Client,
    error::Result,
    http::{Method, QueryParams},
    types::VolumeRemoveOptions,
};
use tracing::instrument;

/// Volumes API resource.
#[derive(Clone, Debug)]
pub struct Volumes {
    client: Client,
}

impl Volumes {
    /// Create a new Volumes resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Remove a volume.
    #[instrument(skip(self), fields(volume_id = %options.volume_id))]
    pub async fn remove(&self, options: VolumeRemoveOptions) -> Result<()> {
        require_id("volume", &options.volume_id)?;

        self.client
            .request(Method::DELETE, &["volumes", options.volume_id.as_str()])?
            .query(QueryParams::new().flag("force", options.force))
            .send()
            .await?
            .empty_result()
    }
}

impl Resource for Volumes {
    fn client(&self) -> &Client {
        &self.client
    }
}
