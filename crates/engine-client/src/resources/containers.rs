//! Containers API endpoint

use super::{Resource, require_id};
use crate::{
    client::Client,
    error::{Error, Result},
    http::{Method, QueryParams},
    types::{
        ContainerJson, ContainerKillOptions, ContainerRemoveOptions, ContainerRenameOptions,
        ContainerRestartOptions, ContainerStopOptions,
    },
};
use tracing::instrument;

/// Containers API resource.
#[derive(Clone, Debug)]
pub struct Containers {
    client: Client,
}

impl Containers {
    /// Create a new Containers resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Remove a container.
    ///
    /// Sends `DELETE /containers/{id}` with `v=1` when volumes should be
    /// removed and `force=1` when a running container should be killed
    /// first. Flags that are off are left out of the query entirely. The ID
    /// is not validated locally; the daemon decides what an empty one means.
    ///
    /// # Errors
    ///
    /// - [`Error::Daemon`](crate::Error::Daemon) when the daemon answers with a non-2xx status
    /// - [`Error::Transport`](crate::Error::Transport) when the request cannot be delivered
    #[instrument(skip(self), fields(container_id = %options.container_id))]
    pub async fn remove(&self, options: ContainerRemoveOptions) -> Result<()> {
        let query = QueryParams::new()
            .flag("v", options.remove_volumes)
            .flag("force", options.force);

        self.client
            .request(Method::DELETE, &["containers", options.container_id.as_str()])?
            .query(query)
            .send()
            .await?
            .empty_result()
    }

    /// Return low-level information about a container.
    #[instrument(skip(self))]
    pub async fn inspect(&self, container_id: &str) -> Result<ContainerJson> {
        require_id("container", container_id)?;

        self.client
            .request(Method::GET, &["containers", container_id, "json"])?
            .send()
            .await?
            .parse_result()
    }

    /// Send a signal to a container.
    #[instrument(skip(self), fields(container_id = %options.container_id))]
    pub async fn kill(&self, options: ContainerKillOptions) -> Result<()> {
        self.post_action(
            &options.container_id,
            "kill",
            QueryParams::new().opt("signal", options.signal.as_deref()),
        )
        .await
    }

    /// Stop a container, killing it after the timeout.
    #[instrument(skip(self), fields(container_id = %options.container_id))]
    pub async fn stop(&self, options: ContainerStopOptions) -> Result<()> {
        self.post_action(
            &options.container_id,
            "stop",
            QueryParams::new().opt("t", options.timeout_secs()),
        )
        .await
    }

    /// Restart a container, killing it after the timeout if it does not stop.
    #[instrument(skip(self), fields(container_id = %options.container_id))]
    pub async fn restart(&self, options: ContainerRestartOptions) -> Result<()> {
        self.post_action(
            &options.container_id,
            "restart",
            QueryParams::new().opt("t", options.timeout_secs()),
        )
        .await
    }

    /// Suspend all processes in a container.
    #[instrument(skip(self))]
    pub async fn pause(&self, container_id: &str) -> Result<()> {
        self.post_action(container_id, "pause", QueryParams::new()).await
    }

    /// Resume a paused container.
    #[instrument(skip(self))]
    pub async fn unpause(&self, container_id: &str) -> Result<()> {
        self.post_action(container_id, "unpause", QueryParams::new()).await
    }

    /// Give a container a new name.
    #[instrument(skip(self), fields(container_id = %options.container_id))]
    pub async fn rename(&self, options: ContainerRenameOptions) -> Result<()> {
        if options.new_name.trim().is_empty() {
            return Err(Error::InvalidRequest(
                "new container name must not be empty".to_string(),
            ));
        }
        self.post_action(
            &options.container_id,
            "rename",
            QueryParams::new().set("name", &options.new_name),
        )
        .await
    }

    async fn post_action(
        &self,
        container_id: &str,
        action: &str,
        query: QueryParams,
    ) -> Result<()> {
        require_id("container", container_id)?;

        self.client
            .request(Method::POST, &["containers", container_id, action])?
            .query(query)
            .send()
            .await?
            .empty_result()
    }
}

impl Resource for Containers {
    fn client(&self) -> &Client {
        &self.client
    }
}
