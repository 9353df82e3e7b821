//! fba-sync - Amazon SP-API to CSV table sync.
//!
//! # Usage
//!
//! ```bash
//! # Fetch FBA inventory summaries into inventory.csv
//! fba-sync fetch inventory
//!
//! # Fetch inbound shipments and shipment items
//! fba-sync fetch shipments
//! fba-sync fetch shipment-items
//!
//! # Restart pagination from the first record
//! fba-sync reset
//! fba-sync reset --source inventory
//! ```
//!
//! Long result sets stop at a per-source threshold; re-running the same
//! command resumes from the stored cursor until the source reports no more
//! pages.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use fba_sync_core::SourceKind;

use fba_sync_cli::commands;
use fba_sync_cli::config::AppConfig;

#[derive(Parser)]
#[command(name = "fba-sync")]
#[command(version, about = "Sync Amazon SP-API inventory and shipment data into CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one fetch session for a data source
    Fetch {
        /// Data source (`inventory`, `shipments`, `shipment-items`)
        source: String,
    },
    /// Restart pagination from the first record
    Reset {
        /// Only reset this source's cursor
        #[arg(short, long)]
        source: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to info for our crates if RUST_LOG is unset
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fba_sync=info,fba_sync_cli=info,alert=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Fetch { source } => {
            let kind: SourceKind = source.parse()?;
            commands::fetch::run(&config, kind).await?;
        }
        Commands::Reset { source } => {
            let kind = source.map(|s| s.parse::<SourceKind>()).transpose()?;
            commands::reset::run(&config, kind).await?;
        }
    }

    Ok(())
}
