//! Amazon Selling Partner API client.
//!
//! Provides read-only access to the FBA inventory and inbound-shipment
//! endpoints used by the fetch flows.
//!
//! # Architecture
//!
//! - Two-layer authentication: refresh token → LWA bearer token → API
//! - The bearer token is cached in process memory for the process lifetime,
//!   with no expiry bookkeeping; a rejected token is re-acquired once and
//!   the request retried once
//! - One page source per endpoint adapts the client to the fetch engine

pub mod auth;
pub mod client;
pub mod pages;
pub mod types;

pub use client::SpApiClient;

use thiserror::Error;

/// Errors that can occur when talking to the SP-API.
#[derive(Debug, Error)]
pub enum SpApiError {
    /// HTTP request or body decoding failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token exchange failed or returned no access token.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The API rejected the access token even after re-acquiring it.
    #[error("unauthorized: access token rejected")]
    Unauthorized,

    /// The API returned a non-success status.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },
}

impl SpApiError {
    /// Whether this error belongs to the credential class.
    ///
    /// Credential failures are surfaced to the operator as an alert; other
    /// fetch failures are only logged.
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::Unauthorized)
    }
}
