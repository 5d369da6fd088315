//! HTTP client for the document store.
//!
//! The store is schema-less: collections `books` and `users`, documents are
//! plain JSON. Operations are add, partial update by id, delete by id, and
//! equality query on a single field. The base URL is injectable so tests can
//! point the client at a mock server.
//!
//! Wire shape:
//! - `POST   /v1/{collection}`            body: document  → `{"id": "..."}`
//! - `PATCH  /v1/{collection}/{id}`       body: set fields only
//! - `DELETE /v1/{collection}/{id}`
//! - `GET    /v1/{collection}[?field=..&value=..]` → `{"documents": [...]}`

use std::fmt;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::types::{BookPatch, LibraryBook, UserProfile};

pub const BOOKS_COLLECTION: &str = "books";
pub const USERS_COLLECTION: &str = "users";

/// Errors that can occur during store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Client misconfigured (bad URL, missing credentials).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The store returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the store's response.
    Parse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(msg) => write!(f, "config error: {msg}"),
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The document store as the screens see it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Adds a book record; returns the store-assigned document id.
    async fn add_book(&self, book: &LibraryBook) -> Result<String, StoreError>;

    /// Partial update: only the patch's set fields are written.
    async fn update_book(&self, id: &str, patch: &BookPatch) -> Result<(), StoreError>;

    async fn delete_book(&self, id: &str) -> Result<(), StoreError>;

    /// The whole `books` collection. Screens filter by owner at render time.
    async fn all_books(&self) -> Result<Vec<LibraryBook>, StoreError>;

    /// Equality query on the owning-user field.
    async fn books_for_user(&self, user_id: &str) -> Result<Vec<LibraryBook>, StoreError>;

    /// Creates the profile document at sign-up; returns its document id.
    async fn add_user(&self, profile: &UserProfile) -> Result<String, StoreError>;
}

#[derive(Deserialize, Debug)]
struct DocumentCreated {
    id: String,
}

#[derive(Deserialize, Debug, Default)]
struct QueryResponse {
    #[serde(default)]
    documents: Vec<LibraryBook>,
}

/// Document store client over the JSON document API.
pub struct HttpStore {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpStore {
    pub fn new(base_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| crate::core::config::DEFAULT_STORE_BASE_URL.to_string()),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key {
            Some(ref key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    async fn create_document<T: serde::Serialize>(
        &self,
        collection: &str,
        document: &T,
    ) -> Result<String, StoreError> {
        let url = format!("{}/v1/{}", self.base_url, collection);
        let response = self
            .authorize(self.client.post(&url))
            .json(document)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::expect_success(response).await?;
        let created: DocumentCreated = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        debug!("Created {} document {}", collection, created.id);
        Ok(created.id)
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn add_book(&self, book: &LibraryBook) -> Result<String, StoreError> {
        self.create_document(BOOKS_COLLECTION, book).await
    }

    async fn update_book(&self, id: &str, patch: &BookPatch) -> Result<(), StoreError> {
        debug!("Updating book {}: {:?}", id, patch);
        let url = format!("{}/v1/{}/{}", self.base_url, BOOKS_COLLECTION, id);
        let response = self
            .authorize(self.client.patch(&url))
            .json(patch)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn delete_book(&self, id: &str) -> Result<(), StoreError> {
        debug!("Deleting book {}", id);
        let url = format!("{}/v1/{}/{}", self.base_url, BOOKS_COLLECTION, id);
        let response = self
            .authorize(self.client.delete(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        Self::expect_success(response).await?;
        Ok(())
    }

    async fn all_books(&self) -> Result<Vec<LibraryBook>, StoreError> {
        let url = format!("{}/v1/{}", self.base_url, BOOKS_COLLECTION);
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::expect_success(response).await?;
        let query: QueryResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(query.documents)
    }

    async fn books_for_user(&self, user_id: &str) -> Result<Vec<LibraryBook>, StoreError> {
        let url = format!("{}/v1/{}", self.base_url, BOOKS_COLLECTION);
        let response = self
            .authorize(
                self.client
                    .get(&url)
                    .query(&[("field", "user_id"), ("value", user_id)]),
            )
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        let response = Self::expect_success(response).await?;
        let query: QueryResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        Ok(query.documents)
    }

    async fn add_user(&self, profile: &UserProfile) -> Result<String, StoreError> {
        self.create_document(USERS_COLLECTION, profile).await
    }
}
