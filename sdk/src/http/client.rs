use crate::client::Client;
use crate::error::MqxError;
use crate::http::config::HttpClientConfig;
use crate::http::HttpTransport;
use async_trait::async_trait;
use reqwest::{Response, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::Serialize;
use std::sync::Arc;
use tracing::trace;

/// HTTP client for interacting with the broker management API.
/// It holds no state besides the base URL and the connection pool,
/// so it can be shared freely between concurrent callers.
#[derive(Debug)]
pub struct HttpClient {
    /// The URL of the management API.
    pub api_url: Url,
    client: ClientWithMiddleware,
}

impl Client for HttpClient {}

#[async_trait]
impl HttpTransport for HttpClient {
    fn get_url(&self, path: &[&str]) -> Result<Url, MqxError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| MqxError::CannotParseUrl)?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    async fn get(&self, path: &[&str]) -> Result<Response, MqxError> {
        let url = self.get_url(path)?;
        trace!("Sending GET request to: {url}");
        let response = self.client.get(url).send().await?;
        Ok(response)
    }

    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        query: &T,
    ) -> Result<Response, MqxError> {
        let url = self.get_url(path)?;
        trace!("Sending GET request with query to: {url}");
        let response = self.client.get(url).query(query).send().await?;
        Ok(response)
    }

    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        payload: &T,
    ) -> Result<Response, MqxError> {
        let url = self.get_url(path)?;
        trace!("Sending POST request to: {url}");
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response)
    }

    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        payload: &T,
    ) -> Result<Response, MqxError> {
        let url = self.get_url(path)?;
        trace!("Sending PUT request to: {url}");
        let response = self.client.put(url).json(payload).send().await?;
        Ok(response)
    }

    async fn delete(&self, path: &[&str]) -> Result<Response, MqxError> {
        let url = self.get_url(path)?;
        trace!("Sending DELETE request to: {url}");
        let response = self.client.delete(url).send().await?;
        Ok(response)
    }
}

impl HttpClient {
    /// Create a new HTTP client for interacting with the management API using the provided URL.
    pub fn new(api_url: &str) -> Result<Self, MqxError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            ..Default::default()
        }))
    }

    /// Create a new HTTP client for interacting with the management API using the provided configuration.
    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, MqxError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| MqxError::CannotParseUrl)?;
        if api_url.cannot_be_a_base() {
            return Err(MqxError::CannotParseUrl);
        }

        let mut inner = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            inner = inner.timeout(timeout);
        }

        let mut client = ClientBuilder::new(inner.build()?);
        if config.retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(config.retries);
            client = client.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        Ok(Self {
            api_url,
            client: client.build(),
        })
    }
}
