//! The `fetch` command: run one session for a data source.

use fba_sync_core::{FetchOutcome, SourceKind};

use crate::config::AppConfig;
use crate::fetch::{FetchEngine, FetchError};
use crate::sink::CsvSink;
use crate::spapi::SpApiClient;
use crate::spapi::pages::{InventoryPages, ShipmentItemPages, ShipmentPages};
use crate::store::StateStore;
use crate::ui::{ConsolePrompt, LogNotifier, Notifier};

/// Run one fetch session and report the outcome to the operator.
///
/// API failures are handled here rather than propagated: credential
/// failures alert the operator, other fetch failures are only logged.
///
/// # Errors
///
/// Returns store and sink failures.
pub async fn run(config: &AppConfig, kind: SourceKind) -> Result<(), FetchError> {
    let store = StateStore::open(&config.state_path).await?;
    let sink = CsvSink::new(&config.out_dir);
    let prompt = ConsolePrompt;
    let notifier = LogNotifier;

    let client = match SpApiClient::new(config.spapi.clone()) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(kind = %kind, error = %err, "failed to build API client");
            return Ok(());
        }
    };

    let outcome = match kind {
        SourceKind::Inventory => {
            let source = InventoryPages::new(client);
            FetchEngine::new(kind, &source, &sink, &store, &prompt)
                .run(None)
                .await
        }
        SourceKind::Shipments => {
            let source = ShipmentPages::new(client);
            FetchEngine::new(kind, &source, &sink, &store, &prompt)
                .run(None)
                .await
        }
        SourceKind::ShipmentItems => {
            let source = ShipmentItemPages::new(client);
            FetchEngine::new(kind, &source, &sink, &store, &prompt)
                .run(None)
                .await
        }
    };

    match outcome {
        Ok(outcome) => {
            report(&notifier, outcome);
            Ok(())
        }
        Err(FetchError::Api(err)) if err.is_auth() => {
            notifier.notify("Authentication Error", "Unable to access api token");
            Ok(())
        }
        Err(FetchError::Api(err)) => {
            // Fetch failures are only logged; credential failures alert.
            tracing::error!(kind = %kind, error = %err, "fetch failed");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn report(notifier: &impl Notifier, outcome: FetchOutcome) {
    match outcome {
        FetchOutcome::Complete => notifier.notify(
            "Fetch Complete",
            "There are no more data to fetch. You've completed fetching all data",
        ),
        FetchOutcome::MoreDataPending => notifier.notify(
            "More data to fetch",
            "There are more data you can fetch. Re-run the command to get the rest of the remaining data",
        ),
        FetchOutcome::NoData => {
            notifier.notify("Data not found", "There is no data in the api response");
        }
        FetchOutcome::Cancelled => {}
    }
}
