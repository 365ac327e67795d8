//! Container option and response types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options for removing a container.
///
/// # Example
///
/// ```rust
/// use engine_client::ContainerRemoveOptions;
///
/// let options = ContainerRemoveOptions::new("web-1")
///     .remove_volumes(true)
///     .force(true);
/// assert!(options.force);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRemoveOptions {
    /// Container ID or name
    pub container_id: String,
    /// Remove the anonymous volumes associated with the container
    pub remove_volumes: bool,
    /// Kill the container first if it is running
    pub force: bool,
}

impl ContainerRemoveOptions {
    /// Options that remove `container_id` and nothing else.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            ..Default::default()
        }
    }

    /// Also remove the container's volumes.
    pub fn remove_volumes(mut self, remove_volumes: bool) -> Self {
        self.remove_volumes = remove_volumes;
        self
    }

    /// Kill the container first if it is running.
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Options for sending a signal to a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerKillOptions {
    /// Container ID or name
    pub container_id: String,
    /// Signal name or number; the daemon defaults to `SIGKILL`
    pub signal: Option<String>,
}

impl ContainerKillOptions {
    /// Kill `container_id` with the daemon's default signal.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            signal: None,
        }
    }

    /// Send `signal` instead of the default.
    pub fn signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = Some(signal.into());
        self
    }
}

/// Options for stopping or restarting a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerStopOptions {
    /// Container ID or name
    pub container_id: String,
    /// Grace period before the daemon kills the container.
    /// Sent in whole seconds.
    pub timeout: Option<Duration>,
}

impl ContainerStopOptions {
    /// Stop `container_id` with the daemon's default grace period.
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            timeout: None,
        }
    }

    /// Wait at most `timeout` before killing.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub(crate) fn timeout_secs(&self) -> Option<u64> {
        self.timeout.map(|t| t.as_secs())
    }
}

/// Restart takes the same options as stop.
pub type ContainerRestartOptions = ContainerStopOptions;

/// Options for renaming a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContainerRenameOptions {
    /// Container ID or current name
    pub container_id: String,
    /// New name
    pub new_name: String,
}

impl ContainerRenameOptions {
    /// Rename `container_id` to `new_name`.
    pub fn new(container_id: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
            new_name: new_name.into(),
        }
    }
}

/// Low-level information about a container, as returned by inspect.
///
/// Only the commonly used fields are decoded; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerJson {
    /// Full container ID
    pub id: String,
    /// Container name, with the leading `/`
    #[serde(default)]
    pub name: String,
    /// Image ID the container was created from
    #[serde(default)]
    pub image: String,
    /// Creation time, RFC 3339
    #[serde(default)]
    pub created: String,
    /// Runtime state
    pub state: Option<ContainerState>,
}

/// Runtime state of a container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContainerState {
    /// e.g. `running`, `exited`
    pub status: String,
    /// Whether the process is running
    pub running: bool,
    /// Whether the container is paused
    pub paused: bool,
    /// Whether the container is being restarted by its policy
    pub restarting: bool,
    /// Host PID of the main process, 0 when not running
    pub pid: i64,
    /// Exit code of the last run
    pub exit_code: i64,
}
