//! Configuration for the engine client

use crate::error::{Error, Result};
use http::HeaderMap;
use std::time::Duration;
use url::Url;

/// Daemon address used when none is configured.
pub const DEFAULT_HOST: &str = "http://localhost:2375";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the engine client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Daemon address, e.g. `tcp://10.0.0.5:2375` or `https://engine:2376`
    pub host: Option<String>,

    /// API version to pin, e.g. `1.24`. Requests go to unversioned paths when unset.
    pub api_version: Option<String>,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Timeout for establishing a connection
    pub connect_timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: None,
            api_version: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration for the given daemon address.
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `DOCKER_HOST` for the daemon address
    /// - `DOCKER_API_VERSION` for the API version to pin
    /// - `DOCKER_CLIENT_TIMEOUT` for request timeout (in seconds)
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let mut config = Self::default();

        if let Ok(host) = env::var("DOCKER_HOST")
            && !host.trim().is_empty()
        {
            config.host = Some(host);
        }

        if let Ok(version) = env::var("DOCKER_API_VERSION")
            && !version.trim().is_empty()
        {
            config.api_version = Some(version);
        }

        if let Ok(timeout_str) = env::var("DOCKER_CLIENT_TIMEOUT") {
            let secs = timeout_str.trim().parse::<u64>().map_err(|_| {
                Error::InvalidRequest(format!(
                    "DOCKER_CLIENT_TIMEOUT must be a number of seconds, got '{timeout_str}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.host.is_some() {
            self.host = other.host;
        }
        if other.api_version.is_some() {
            self.api_version = other.api_version;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        if other.connect_timeout != DEFAULT_CONNECT_TIMEOUT {
            self.connect_timeout = other.connect_timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }

        self
    }

    /// Resolve the configured host into the base URL requests are built on.
    pub fn base_url(&self) -> Result<Url> {
        parse_host(self.host.as_deref().unwrap_or(DEFAULT_HOST))
    }

    /// The configured API version without a leading `v`, if any.
    pub fn normalized_api_version(&self) -> Option<String> {
        self.api_version
            .as_deref()
            .map(|v| v.trim().trim_start_matches('v').to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Parse a daemon address into an HTTP(S) base URL.
///
/// `tcp://` is dialled as plain HTTP. Socket and pipe schemes are rejected.
pub fn parse_host(host: &str) -> Result<Url> {
    let host = host.trim();
    if host.is_empty() {
        return Err(Error::InvalidUrl("daemon host must not be empty".to_string()));
    }

    let (scheme, rest) = host
        .split_once("://")
        .ok_or_else(|| Error::InvalidUrl(format!("'{host}' has no scheme")))?;

    let normalized = match scheme {
        "http" | "https" => host.to_string(),
        "tcp" => format!("http://{rest}"),
        "unix" | "npipe" => return Err(Error::UnsupportedProtocol(scheme.to_string())),
        other => {
            return Err(Error::InvalidUrl(format!(
                "unknown scheme '{other}', expected http, https or tcp"
            )));
        }
    };

    let url = Url::parse(&normalized).map_err(|e| Error::InvalidUrl(format!("{host}: {e}")))?;
    if url.host_str().is_none() {
        return Err(Error::InvalidUrl(format!("'{host}' has no host")));
    }
    Ok(url)
}
