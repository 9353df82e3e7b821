//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SPAPI_REFRESH_TOKEN` - Login-with-Amazon refresh token
//! - `SPAPI_CLIENT_ID` - LWA application client ID
//! - `SPAPI_CLIENT_SECRET` - LWA application client secret
//! - `SPAPI_MARKETPLACE_ID` - Marketplace the queries run against
//!
//! ## Optional
//! - `SPAPI_ENDPOINT` - Regional SP-API endpoint (default: EU)
//! - `SPAPI_AUTH_ENDPOINT` - LWA token-exchange endpoint (default:
//!   `https://api.amazon.com/auth/o2/token`)
//! - `SPAPI_GRANULARITY_ID` - Inventory granularity ID (default: empty)
//! - `SPAPI_LAST_UPDATED_AFTER` - Lower bound for shipment-item queries,
//!   RFC 3339 (default: 2015-09-18T22:51:57.926Z)
//! - `FBA_SYNC_STATE_PATH` - Cursor-store SQLite file (default:
//!   fba-sync-state.db)
//! - `FBA_SYNC_OUT_DIR` - Directory the CSV tables are written to
//!   (default: current directory)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://sellingpartnerapi-eu.amazon.com";
const DEFAULT_AUTH_ENDPOINT: &str = "https://api.amazon.com/auth/o2/token";
const DEFAULT_LAST_UPDATED_AFTER: &str = "2015-09-18T22:51:57.926Z";
const DEFAULT_STATE_PATH: &str = "fba-sync-state.db";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// SP-API credentials and endpoint selection.
    pub spapi: SpApiConfig,
    /// SQLite file holding continuation cursors.
    pub state_path: PathBuf,
    /// Directory the CSV tables are written to.
    pub out_dir: PathBuf,
}

/// SP-API configuration.
///
/// Implements `Debug` manually to redact the LWA credentials.
#[derive(Clone)]
pub struct SpApiConfig {
    /// Regional SP-API endpoint, no trailing slash.
    pub endpoint: String,
    /// LWA token-exchange endpoint.
    pub auth_endpoint: String,
    /// Long-lived LWA refresh token.
    pub refresh_token: SecretString,
    /// LWA application client ID.
    pub client_id: String,
    /// LWA application client secret.
    pub client_secret: SecretString,
    /// Marketplace ID used by every query.
    pub marketplace_id: String,
    /// Granularity ID for inventory summaries (usually empty).
    pub granularity_id: String,
    /// Lower `LastUpdatedAfter` bound for shipment-item queries, RFC 3339.
    pub last_updated_after: String,
}

impl std::fmt::Debug for SpApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpApiConfig")
            .field("endpoint", &self.endpoint)
            .field("auth_endpoint", &self.auth_endpoint)
            .field("refresh_token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("marketplace_id", &self.marketplace_id)
            .field("granularity_id", &self.granularity_id)
            .field("last_updated_after", &self.last_updated_after)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            spapi: SpApiConfig::from_env()?,
            state_path: PathBuf::from(get_env_or_default(
                "FBA_SYNC_STATE_PATH",
                DEFAULT_STATE_PATH,
            )),
            out_dir: PathBuf::from(get_env_or_default("FBA_SYNC_OUT_DIR", ".")),
        })
    }
}

impl SpApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let last_updated_after =
            get_env_or_default("SPAPI_LAST_UPDATED_AFTER", DEFAULT_LAST_UPDATED_AFTER);
        validate_rfc3339("SPAPI_LAST_UPDATED_AFTER", &last_updated_after)?;

        Ok(Self {
            endpoint: get_env_or_default("SPAPI_ENDPOINT", DEFAULT_ENDPOINT),
            auth_endpoint: get_env_or_default("SPAPI_AUTH_ENDPOINT", DEFAULT_AUTH_ENDPOINT),
            refresh_token: get_required_secret("SPAPI_REFRESH_TOKEN")?,
            client_id: get_required_env("SPAPI_CLIENT_ID")?,
            client_secret: get_required_secret("SPAPI_CLIENT_SECRET")?,
            marketplace_id: get_required_env("SPAPI_MARKETPLACE_ID")?,
            granularity_id: get_optional_env("SPAPI_GRANULARITY_ID").unwrap_or_default(),
            last_updated_after,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a timestamp variable parses as RFC 3339.
fn validate_rfc3339(key: &str, value: &str) -> Result<(), ConfigError> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|_| ())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rfc3339_accepts_default() {
        assert!(validate_rfc3339("TEST_VAR", DEFAULT_LAST_UPDATED_AFTER).is_ok());
    }

    #[test]
    fn test_validate_rfc3339_rejects_garbage() {
        let result = validate_rfc3339("TEST_VAR", "last tuesday");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_spapi_config_debug_redacts_secrets() {
        let config = SpApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            refresh_token: SecretString::from("Atzr|refresh-token-value"),
            client_id: "amzn1.application-oa2-client.test".to_string(),
            client_secret: SecretString::from("super-secret-client-secret"),
            marketplace_id: "A1PA6795UKMFR9".to_string(),
            granularity_id: String::new(),
            last_updated_after: DEFAULT_LAST_UPDATED_AFTER.to_string(),
        };

        let debug_output = format!("{config:?}");

        // Public fields should be visible
        assert!(debug_output.contains("A1PA6795UKMFR9"));
        assert!(debug_output.contains("amzn1.application-oa2-client.test"));

        // Secret fields should be redacted
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("Atzr|refresh-token-value"));
        assert!(!debug_output.contains("super-secret-client-secret"));
    }

    #[test]
    fn test_missing_env_var_error_display() {
        let err = ConfigError::MissingEnvVar("SPAPI_CLIENT_ID".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SPAPI_CLIENT_ID"
        );
    }
}
