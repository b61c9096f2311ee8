use std::time::Duration;

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// The URL of the broker management API, without the `/api` prefix.
    pub api_url: String,
    /// The number of retries for transient transport failures, `0` disables retrying.
    pub retries: u32,
    /// The timeout of a single request, `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: "http://127.0.0.1:8080".to_string(),
            retries: 0,
            timeout: None,
        }
    }
}

/// The builder for the `HttpClientConfig` configuration.
/// Allows configuring the HTTP client with custom settings or using defaults:
/// - `api_url`: Default is "http://127.0.0.1:8080"
/// - `retries`: Default is 0.
/// - `timeout`: Default is none.
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Create a new `HttpClientConfigBuilder` with default settings.
    pub fn new() -> Self {
        HttpClientConfigBuilder::default()
    }

    /// Sets the server address for the HTTP client.
    pub fn with_api_url(mut self, url: String) -> Self {
        self.config.api_url = url;
        self
    }

    /// Sets the number of retries for the HTTP client.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.config.retries = retries;
        self
    }

    /// Sets the request timeout for the HTTP client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Builds the `HttpClientConfig` configuration.
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}
