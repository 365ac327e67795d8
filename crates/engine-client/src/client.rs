//! Main client implementation for the engine API

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use engine_transport::{HttpTransport, HttpTransportConfig, Transport};
use http::{HeaderMap, HeaderName, HeaderValue, Method, header::USER_AGENT};
use url::Url;

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    http::RequestBuilder,
    resources::{Containers, Images, Networks, System, Volumes},
};

/// Client for a container engine daemon.
///
/// The transport that delivers requests is an explicit dependency: the
/// builder creates an [`HttpTransport`] unless one is supplied.
///
/// # Example
///
/// ```rust,no_run
/// use engine_client::{Client, ContainerRemoveOptions};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::builder().host("tcp://127.0.0.1:2375").build()?;
///
/// client
///     .containers()
///     .remove(ContainerRemoveOptions::new("web-1").force(true))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    base_url: Url,
    /// Without the leading `v`
    api_version: Option<String>,
    default_headers: HeaderMap,
}

impl Client {
    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from `DOCKER_HOST`, `DOCKER_API_VERSION` and
    /// `DOCKER_CLIENT_TIMEOUT`.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from a configuration object, dialling over HTTP.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::with_config(HttpTransportConfig {
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
            ..Default::default()
        })?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client with default configuration that sends through
    /// `transport`.
    ///
    /// ```rust
    /// use engine_client::Client;
    /// use engine_transport::mock::{MockTransport, error_mock};
    /// use std::sync::Arc;
    ///
    /// let client = Client::from_transport(Arc::new(MockTransport::new(error_mock(500, "Server error"))))
    ///     .unwrap();
    /// assert_eq!(client.transport_name(), "mock");
    /// ```
    pub fn from_transport(transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_transport(ClientConfig::default(), transport)
    }

    fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = config.base_url()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("engine-client/", env!("CARGO_PKG_VERSION"))),
        );
        for (key, value) in &config.default_headers {
            default_headers.insert(key.clone(), value.clone());
        }

        tracing::debug!(
            base_url = %base_url,
            api_version = ?config.normalized_api_version(),
            transport = transport.name(),
            "Engine client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                api_version: config.normalized_api_version(),
                transport,
                base_url,
                default_headers,
            }),
        })
    }

    /// Container endpoints.
    pub fn containers(&self) -> Containers {
        Containers::new(self.clone())
    }

    /// Image endpoints.
    pub fn images(&self) -> Images {
        Images::new(self.clone())
    }

    /// Volume endpoints.
    pub fn volumes(&self) -> Volumes {
        Volumes::new(self.clone())
    }

    /// Network endpoints.
    pub fn networks(&self) -> Networks {
        Networks::new(self.clone())
    }

    /// Daemon-level endpoints.
    pub fn system(&self) -> System {
        System::new(self.clone())
    }

    /// Base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Pinned API version, if any.
    pub fn api_version(&self) -> Option<&str> {
        self.inner.api_version.as_deref()
    }

    /// Name of the transport in use (for debugging).
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.name()
    }

    /// Resolve API path segments against the base URL.
    ///
    /// Each segment is percent-encoded on its own, and the path is prefixed
    /// with `/v<version>` when a version is pinned.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::InvalidUrl(format!("{} cannot be a base URL", self.inner.base_url))
            })?;
            path.pop_if_empty();
            if let Some(version) = &self.inner.api_version {
                path.push(&format!("v{version}"));
            }
            path.extend(segments);
        }
        Ok(url)
    }

    /// Create a request builder for the given path segments.
    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        Ok(RequestBuilder::new(self.inner.transport.clone(), method, url)
            .headers(&self.inner.default_headers))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_version", &self.inner.api_version)
            .field("transport", &self.inner.transport)
            .finish()
    }
}

/// Builder for creating a configured Client.
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the daemon address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = Some(host.into());
        self
    }

    /// Pin the API version, e.g. `1.24`.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = Some(api_version.into());
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Send requests through `transport` instead of a new HTTP transport.
    ///
    /// Timeouts configured on this builder are then not applied; they belong
    /// to the transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        match self.transport {
            Some(transport) => Client::with_transport(self.config, transport),
            None => Client::from_config(self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use engine_transport::{HttpResponse, MockTransport};

    fn mock_client(version: Option<&str>) -> Client {
        let mut builder = Client::builder().transport(MockTransport::new(|_| Ok(HttpResponse::ok())));
        if let Some(version) = version {
            builder = builder.api_version(version);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .host("tcp://127.0.0.1:2375")
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:2375/");
        assert_eq!(client.transport_name(), "http");
    }

    #[test]
    fn test_client_from_config_rejects_unix_socket() {
        let result = Client::from_config(ClientConfig::with_host("unix:///var/run/docker.sock"));
        assert_matches!(result, Err(Error::UnsupportedProtocol(_)));
    }

    #[test]
    fn test_invalid_default_header() {
        assert_matches!(
            Client::builder().default_header("bad header", "x"),
            Err(Error::InvalidHeaderName(_))
        );
        assert_matches!(
            Client::builder().default_header("x-ok", "line\nbreak"),
            Err(Error::InvalidHeaderValue(_))
        );
    }

    #[test]
    fn test_builder_debug_shows_config() {
        let builder = Client::builder().host("tcp://engine:2375");
        let debug = format!("{builder:?}");
        assert!(debug.contains("ClientBuilder"));
        assert!(debug.contains("tcp://engine:2375"));
    }

    #[test]
    fn test_endpoint_without_version() {
        let client = mock_client(None);
        let url = client.endpoint(&["containers", "container_id"]).unwrap();
        assert_eq!(url.path(), "/containers/container_id");
    }

    #[test]
    fn test_endpoint_with_version() {
        let client = mock_client(Some("1.24"));
        assert_eq!(client.api_version(), Some("1.24"));
        let url = client.endpoint(&["containers", "container_id"]).unwrap();
        assert_eq!(url.path(), "/v1.24/containers/container_id");
    }

    #[test]
    fn test_endpoint_keeps_base_path_and_escapes_segments() {
        let client = Client::builder()
            .host("tcp://engine:2375/proxy")
            .transport(MockTransport::new(|_| Ok(HttpResponse::ok())))
            .build()
            .unwrap();

        let url = client.endpoint(&["images", "library/busybox:latest"]).unwrap();
        assert_eq!(url.path(), "/proxy/images/library%2Fbusybox:latest");
    }

    #[test]
    fn test_client_clone_shares_inner() {
        let client1 = mock_client(Some("1.24"));
        let client2 = client1.clone();

        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
        assert_eq!(client1.base_url(), client2.base_url());
    }

    #[test]
    fn test_debug_output() {
        let client = mock_client(None);
        let debug = format!("{client:?}");
        assert!(debug.contains("localhost:2375"));
        assert!(debug.contains("MockTransport"));
    }
}
