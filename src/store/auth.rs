//! Email/password identity against the store's auth endpoint.
//!
//! Sign-in and sign-up both return an opaque user identifier plus a bearer
//! token. The app keeps nothing else; profile data lives in the `users`
//! collection.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use super::client::StoreError;

/// A signed-in identity. `user_id` is assigned by the identity provider.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl AuthSession {
    /// Display name derived from the email local part ("me@example.com" -> "me").
    pub fn display_name(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

/// The identity provider as the login screen sees it.
#[async_trait]
pub trait Identity: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, StoreError>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, StoreError>;
}

#[derive(Serialize, Debug)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug)]
struct AuthResponse {
    user_id: String,
    #[serde(default)]
    token: Option<String>,
}

/// Identity client over the store's auth endpoints
/// (`POST /v1/auth/sign_in`, `POST /v1/auth/sign_up`).
pub struct HttpIdentity {
    base_url: String,
    client: reqwest::Client,
}

impl HttpIdentity {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url
                .unwrap_or_else(|| crate::core::config::DEFAULT_STORE_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, StoreError> {
        let url = format!("{}/v1/auth/{}", self.base_url, endpoint);
        let response = self
            .client
            .post(&url)
            .json(&Credentials { email, password })
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        debug!("Authenticated as {}", auth.user_id);
        Ok(AuthSession {
            user_id: auth.user_id,
            email: email.to_string(),
            token: auth.token,
        })
    }
}

#[async_trait]
impl Identity for HttpIdentity {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, StoreError> {
        self.authenticate("sign_in", email, password).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthSession, StoreError> {
        self.authenticate("sign_up", email, password).await
    }
}
