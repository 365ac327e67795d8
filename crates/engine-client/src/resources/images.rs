//! Images API endpoint

use super::{Resource, require_id};
use crate::{
    client::Client,
    error::Result,
    http::{Method, QueryParams},
    types::{ImageDeleteResponseItem, ImageRemoveOptions},
};
use tracing::instrument;

/// Images API resource.
#[derive(Clone, Debug)]
pub struct Images {
    client: Client,
}

impl Images {
    /// Create a new Images resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Remove an image, returning what was untagged and deleted.
    ///
    /// Parent pruning is opt-in here, so `noprune=1` is sent unless
    /// `prune_children` is set.
    #[instrument(skip(self), fields(image_id = %options.image_id))]
    pub async fn remove(
        &self,
        options: ImageRemoveOptions,
    ) -> Result<Vec<ImageDeleteResponseItem>> {
        require_id("image", &options.image_id)?;

        let query = QueryParams::new()
            .flag("force", options.force)
            .flag("noprune", !options.prune_children);

        self.client
            .request(Method::DELETE, &["images", options.image_id.as_str()])?
            .query(query)
            .send()
            .await?
            .parse_result()
    }
}

impl Resource for Images {
    fn client(&self) -> &Client {
        &self.client
    }
}
