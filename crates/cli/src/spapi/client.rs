//! SP-API HTTP client.
//!
//! Wraps `reqwest` with the bearer-token cache and the `x-amz-access-token`
//! header scheme. The token is exchanged lazily on the first request and
//! reused for the process lifetime with no expiry bookkeeping; a 401-class
//! response drops the cached token, re-acquires it, and retries the request
//! exactly once.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::instrument;

use super::SpApiError;
use super::auth::exchange_refresh_token;
use crate::config::SpApiConfig;

/// Bearer token header carried by every SP-API request.
const ACCESS_TOKEN_HEADER: &str = "x-amz-access-token";

/// SP-API client.
///
/// Cheap to clone; every clone shares the HTTP connection pool and the token
/// cache.
#[derive(Clone)]
pub struct SpApiClient {
    inner: Arc<SpApiClientInner>,
}

struct SpApiClientInner {
    http: reqwest::Client,
    config: SpApiConfig,
    /// In-memory token cache, shared by every source kind for the process
    /// lifetime.
    token: RwLock<Option<SecretString>>,
}

impl SpApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns `SpApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: SpApiConfig) -> Result<Self, SpApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            inner: Arc::new(SpApiClientInner {
                http,
                config,
                token: RwLock::new(None),
            }),
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &SpApiConfig {
        &self.inner.config
    }

    /// Issue one GET against an SP-API path and deserialize the JSON body.
    ///
    /// A 401-class response invalidates the cached token and retries exactly
    /// once with a freshly exchanged token; a second rejection surfaces as
    /// `SpApiError::Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns `SpApiError::AuthenticationFailed` if the token exchange
    /// fails, `SpApiError::Api` for non-success statuses, and
    /// `SpApiError::Http` for transport or body-decoding failures.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SpApiError> {
        match self.try_get(path, query).await {
            Err(SpApiError::Unauthorized) => {
                tracing::debug!("access token rejected, re-acquiring");
                *self.inner.token.write().await = None;
                self.try_get(path, query).await
            }
            other => other,
        }
    }

    async fn try_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SpApiError> {
        let token = self.access_token().await?;
        let url = format!("{}{path}", self.inner.config.endpoint);

        let response = self
            .inner
            .http
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .header(ACCESS_TOKEN_HEADER, token.expose_secret())
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SpApiError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(SpApiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Get the cached bearer token, exchanging the refresh token if nothing
    /// is cached yet.
    async fn access_token(&self) -> Result<SecretString, SpApiError> {
        if let Some(token) = self.inner.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let token = exchange_refresh_token(&self.inner.http, &self.inner.config).await?;
        *self.inner.token.write().await = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SpApiConfig {
        SpApiConfig {
            endpoint: "https://sellingpartnerapi-eu.amazon.com".to_string(),
            auth_endpoint: "https://api.amazon.com/auth/o2/token".to_string(),
            refresh_token: SecretString::from("refresh"),
            client_id: "client".to_string(),
            client_secret: SecretString::from("secret"),
            marketplace_id: "A1PA6795UKMFR9".to_string(),
            granularity_id: String::new(),
            last_updated_after: "2015-09-18T22:51:57.926Z".to_string(),
        }
    }

    #[test]
    fn test_client_starts_without_token() {
        let client = SpApiClient::new(test_config()).expect("client builds");
        assert!(client.inner.token.blocking_read().is_none());
    }

    #[test]
    fn test_clones_share_token_cache() {
        let client = SpApiClient::new(test_config()).expect("client builds");
        let clone = client.clone();
        *client.inner.token.blocking_write() = Some(SecretString::from("tok"));
        assert!(clone.inner.token.blocking_read().is_some());
    }
}
