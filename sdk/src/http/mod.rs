use crate::error::MqxError;
use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Serialize;

pub mod client;
pub mod config;
pub mod consumer_groups;
pub mod consumer_offsets;
pub mod envelope;
pub mod messages;
pub mod partitions;
pub mod topics;

pub(crate) const API: &str = "api";
pub(crate) const TOPICS: &str = "topics";

/// Raw request surface of the management API.
///
/// Paths are given as segments (e.g. `["api", "topics", "orders"]`), each one encoded
/// as a single path segment. No HTTP status is turned into an error here, the response
/// is always handed back to be unwrapped by [`envelope::Envelope`].
#[async_trait]
pub trait HttpTransport {
    /// Get full URL for the provided path segments.
    fn get_url(&self, path: &[&str]) -> Result<Url, MqxError>;

    /// Invoke HTTP GET request to the management API.
    async fn get(&self, path: &[&str]) -> Result<Response, MqxError>;

    /// Invoke HTTP GET request to the management API with query parameters.
    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        query: &T,
    ) -> Result<Response, MqxError>;

    /// Invoke HTTP POST request to the management API.
    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        payload: &T,
    ) -> Result<Response, MqxError>;

    /// Invoke HTTP PUT request to the management API.
    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &[&str],
        payload: &T,
    ) -> Result<Response, MqxError>;

    /// Invoke HTTP DELETE request to the management API.
    async fn delete(&self, path: &[&str]) -> Result<Response, MqxError>;
}
