//! The fetch engine: accumulate pages, flush once, settle the cursor.

use fba_sync_core::{FetchOutcome, SourceKind, ToRow};

use super::{FetchError, FetchPolicy, PageSource};
use crate::sink::{AppendOutcome, RowSink};
use crate::store::{self, StateStore};
use crate::ui::Prompt;

/// Shown before a run that would start over from the first record.
const FRESH_START_MESSAGE: &str =
    "You are about to start fetching from the first record. Continue?";

/// Drives one fetch session for a single source kind.
///
/// The engine owns no state between runs; each [`run`](Self::run) starts
/// with an empty accumulator and performs exactly one sink append and at
/// most one cursor write or delete.
pub struct FetchEngine<'a, S, K, P> {
    kind: SourceKind,
    policy: FetchPolicy,
    source: &'a S,
    sink: &'a K,
    store: &'a StateStore,
    prompt: &'a P,
}

impl<'a, S, K, P> FetchEngine<'a, S, K, P>
where
    S: PageSource,
    S::Record: ToRow,
    K: RowSink,
    P: Prompt,
{
    /// Create an engine wired to its collaborators.
    pub const fn new(
        kind: SourceKind,
        source: &'a S,
        sink: &'a K,
        store: &'a StateStore,
        prompt: &'a P,
    ) -> Self {
        Self {
            kind,
            policy: FetchPolicy::for_source(kind),
            source,
            sink,
            store,
            prompt,
        }
    }

    /// Run one session.
    ///
    /// `start_cursor` overrides the persisted cursor when given (manual
    /// continuation); otherwise the session resumes from storage.
    ///
    /// # Errors
    ///
    /// API, store, and sink failures are terminal for the session and leave
    /// persisted state untouched; re-invoking is always safe.
    pub async fn run(&self, start_cursor: Option<String>) -> Result<FetchOutcome, FetchError> {
        let cursor_key = store::cursor_key(self.kind);

        let mut cursor = match start_cursor {
            Some(token) => Some(token),
            None => self.store.get(&cursor_key).await?,
        };

        if self.policy.confirm_fresh_start
            && cursor.is_none()
            && self.store.get(store::CONFIRMED_KEY).await?.is_none()
        {
            if !self.prompt.confirm(FRESH_START_MESSAGE) {
                return Ok(FetchOutcome::Cancelled);
            }
            self.store.set(store::CONFIRMED_KEY, "true").await?;
        }

        let mut accumulated: Vec<S::Record> = Vec::new();

        loop {
            let page = self.source.fetch_page(cursor.as_deref()).await?;
            let batch_was_empty = page.records.is_empty();

            accumulated.extend(page.records);
            cursor = page.next_token;

            tracing::debug!(
                kind = %self.kind,
                accumulated = accumulated.len(),
                has_more = cursor.is_some(),
                "page fetched"
            );

            if self.policy.stop_on_empty_batch && batch_was_empty {
                // An empty page ends the run outright; any token in the
                // response is discarded along with the stored cursor.
                self.flush(&accumulated)?;
                self.store.delete(&cursor_key).await?;
                return Ok(FetchOutcome::Complete);
            }

            let more = cursor.is_some()
                && self.policy.follow_cursor
                && self.policy.threshold.is_none_or(|t| accumulated.len() < t);
            if !more {
                break;
            }
        }

        match self.flush(&accumulated)? {
            AppendOutcome::NoData => Ok(FetchOutcome::NoData),
            AppendOutcome::Appended(count) => {
                tracing::info!(kind = %self.kind, rows = count, "rows appended");

                if let Some(token) = cursor {
                    self.store.set(&cursor_key, &token).await?;
                    Ok(FetchOutcome::MoreDataPending)
                } else {
                    self.store.delete(&cursor_key).await?;
                    if self.policy.confirm_fresh_start {
                        self.store.delete(store::CONFIRMED_KEY).await?;
                    }
                    Ok(FetchOutcome::Complete)
                }
            }
        }
    }

    /// Map the accumulated batch and hand it to the sink.
    fn flush(&self, records: &[S::Record]) -> Result<AppendOutcome, FetchError> {
        let rows = records.iter().map(ToRow::to_row).collect();
        Ok(self.sink.append(self.kind, rows)?)
    }
}
