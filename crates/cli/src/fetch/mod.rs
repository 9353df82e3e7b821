//! The paginated fetch-and-persist loop.
//!
//! One engine drives all three data sources; per-source differences are
//! confined to a [`FetchPolicy`] row and the [`PageSource`] implementation.
//! A session accumulates pages in memory, flushes to the sink exactly once,
//! and then settles the persisted cursor: kept when the threshold stopped the
//! run early, cleared when the source was exhausted.

mod engine;
mod policy;

pub use engine::FetchEngine;
pub use policy::FetchPolicy;

use thiserror::Error;

use crate::sink::SinkError;
use crate::spapi::SpApiError;
use crate::store::StoreError;

/// One page of records plus the continuation token, if any.
#[derive(Debug, Clone)]
pub struct Page<R> {
    /// Records in API response order.
    pub records: Vec<R>,
    /// Opaque token for the next page; `None` means the source is exhausted.
    pub next_token: Option<String>,
}

/// A paged list endpoint, one implementation per source kind.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// The record shape this endpoint returns.
    type Record;

    /// Fetch a single page at the given continuation cursor.
    ///
    /// # Errors
    ///
    /// Any `SpApiError` is terminal for the session: no retry, no partial
    /// append, and persisted state is left untouched.
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<Page<Self::Record>, SpApiError>;
}

/// Errors from a fetch session.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API or the token exchange failed.
    #[error(transparent)]
    Api(#[from] SpApiError),

    /// Cursor storage failed.
    #[error("cursor store error: {0}")]
    Store(#[from] StoreError),

    /// The sink rejected the append.
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}
