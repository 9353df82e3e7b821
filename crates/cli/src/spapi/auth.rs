//! Login-with-Amazon token exchange.
//!
//! Exchanges the long-lived refresh token for the short-lived bearer token
//! sent on every SP-API request.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use super::SpApiError;
use crate::config::SpApiConfig;

/// Response from the LWA token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Error response from the LWA token endpoint.
#[derive(Deserialize)]
struct TokenErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchange the stored refresh token for a bearer token.
///
/// # Errors
///
/// Returns `SpApiError::AuthenticationFailed` if the exchange is rejected or
/// the response carries no `access_token`; the caller must not proceed with
/// an empty token header.
#[instrument(skip(client, config))]
pub async fn exchange_refresh_token(
    client: &reqwest::Client,
    config: &SpApiConfig,
) -> Result<SecretString, SpApiError> {
    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", config.refresh_token.expose_secret()),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.expose_secret()),
    ];

    let response = client
        .post(&config.auth_endpoint)
        .form(&params)
        .send()
        .await?;
    let status = response.status();

    if status.is_success() {
        let body: TokenResponse = response.json().await?;

        match body.access_token {
            Some(token) if !token.is_empty() => Ok(SecretString::from(token)),
            _ => Err(SpApiError::AuthenticationFailed(
                "token response carried no access_token".to_string(),
            )),
        }
    } else {
        let body: TokenErrorResponse =
            response.json().await.unwrap_or_else(|_| TokenErrorResponse {
                error: None,
                error_description: None,
            });

        let message = body
            .error_description
            .or(body.error)
            .unwrap_or_else(|| format!("HTTP {status}"));

        Err(SpApiError::AuthenticationFailed(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parses_access_token() {
        let body: TokenResponse =
            serde_json::from_str(r#"{"access_token":"Atza|abc","token_type":"bearer","expires_in":3600}"#)
                .expect("valid token response");
        assert_eq!(body.access_token.as_deref(), Some("Atza|abc"));
    }

    #[test]
    fn test_token_response_tolerates_missing_token() {
        let body: TokenResponse = serde_json::from_str("{}").expect("empty object");
        assert!(body.access_token.is_none());
    }

    #[test]
    fn test_error_response_prefers_description() {
        let body: TokenErrorResponse = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"The request has an invalid grant parameter"}"#,
        )
        .expect("valid error response");
        assert_eq!(
            body.error_description.or(body.error).as_deref(),
            Some("The request has an invalid grant parameter")
        );
    }
}
