//! HTTP client for the books catalog.
//!
//! Two operations: keyword search (`GET /volumes?q=...`) and single-item
//! lookup (`GET /volumes/{id}`). The base URL is injectable so tests can
//! point the client at a mock server.

use std::fmt;

use async_trait::async_trait;
use log::debug;

use super::types::{Volume, VolumeList};

/// Errors that can occur while talking to the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The catalog returned a non-success status.
    Api { status: u16, message: String },
    /// Failed to parse the catalog's response.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Api { status, message } => {
                write!(f, "catalog error (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// The catalog as the screens see it. Trait-seamed so holders can be
/// exercised with fakes.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Keyword search. An absent `items` array means an empty result, not
    /// an error.
    async fn search(&self, query: &str) -> Result<Vec<Volume>, CatalogError>;

    /// Single-volume lookup by catalog id.
    async fn fetch(&self, volume_id: &str) -> Result<Volume, CatalogError>;
}

/// Catalog client over the Google-Books-shaped HTTP API.
pub struct HttpCatalog {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpCatalog {
    /// # Arguments
    /// * `base_url` - Optional custom base URL (defaults to the public catalog)
    /// * `api_key` - Optional API key, sent as the `key` query parameter
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| crate::core::config::DEFAULT_CATALOG_BASE_URL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let mut request = self.client.get(&url).query(query);
        if let Some(ref key) = self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn search(&self, query: &str) -> Result<Vec<Volume>, CatalogError> {
        debug!("Catalog search: {:?}", query);
        let url = format!("{}/volumes", self.base_url);
        let list: VolumeList = self.get_json(url, &[("q", query)]).await?;
        debug!("Catalog search returned {} volumes", list.items.len());
        Ok(list.items)
    }

    async fn fetch(&self, volume_id: &str) -> Result<Volume, CatalogError> {
        debug!("Catalog fetch: {}", volume_id);
        let url = format!("{}/volumes/{}", self.base_url, volume_id);
        self.get_json(url, &[]).await
    }
}
