//! Daemon-level response types

use serde::{Deserialize, Serialize};

/// Daemon version information from `GET /version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Version {
    /// Engine release
    pub version: String,
    /// Newest API version the daemon speaks
    pub api_version: String,
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// Host kernel version
    pub kernel_version: String,
    /// Go toolchain the daemon was built with
    pub go_version: String,
    /// Source revision
    pub git_commit: String,
    /// Oldest API version the daemon still accepts
    #[serde(rename = "MinAPIVersion", skip_serializing_if = "Option::is_none")]
    pub min_api_version: Option<String>,
}
