//! The `reset` command: restart pagination from the first record.

use fba_sync_core::SourceKind;

use crate::config::AppConfig;
use crate::store::{self, StateStore, StoreError};
use crate::ui::{LogNotifier, Notifier};

/// Clear stored cursors and the fresh-start confirmation flag.
///
/// With a `kind`, only that source's cursor is cleared; without one, every
/// source is reset. The confirmation flag is cleared either way, so the next
/// inventory run asks again.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or written.
pub async fn run(config: &AppConfig, kind: Option<SourceKind>) -> Result<(), StoreError> {
    let state = StateStore::open(&config.state_path).await?;

    match kind {
        Some(kind) => state.delete(&store::cursor_key(kind)).await?,
        None => {
            for kind in SourceKind::ALL {
                state.delete(&store::cursor_key(kind)).await?;
            }
        }
    }
    state.delete(store::CONFIRMED_KEY).await?;

    LogNotifier.notify(
        "Data pagination restarted",
        "Next time you make a request it will start from the first record",
    );

    Ok(())
}
