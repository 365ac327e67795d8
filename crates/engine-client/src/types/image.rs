//! Image option and response types

use serde::{Deserialize, Serialize};

/// Options for removing an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRemoveOptions {
    /// Image ID, or name and tag
    pub image_id: String,
    /// Remove the image even if it is in use by stopped containers or has other tags
    pub force: bool,
    /// Also delete untagged parent images. When off, `noprune=1` is sent.
    pub prune_children: bool,
}

impl ImageRemoveOptions {
    /// Remove `image_id` without force and without pruning parents.
    pub fn new(image_id: impl Into<String>) -> Self {
        Self {
            image_id: image_id.into(),
            ..Default::default()
        }
    }

    /// Remove even if in use.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Also delete untagged parents.
    pub fn prune_children(mut self, prune_children: bool) -> Self {
        self.prune_children = prune_children;
        self
    }
}

/// One entry of an image removal report: a tag that was dropped or a layer
/// that was deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDeleteResponseItem {
    /// Reference that was untagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untagged: Option<String>,
    /// Image ID that was deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
}
