//! CLI command runner

use super::commands::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::http::HttpClient;
use crate::odata;
use crate::state::{BookmarkStore, FileBookmarkStore};
use crate::sync::SyncClient;
use tracing::{info, warn};

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Sync {
                full,
                preview,
                dry_run,
            } => self.run_sync(*full, *preview, *dry_run).await,
            Commands::ShowState => self.show_state().await,
        }
    }

    async fn run_sync(&self, full: bool, preview: usize, dry_run: bool) -> Result<()> {
        let settings = Settings::from_file(&self.cli.settings)?;
        let http = HttpClient::with_auth(settings.client_config(), settings.auth.clone());
        let client = SyncClient::new(http).with_page_size(settings.page_size);
        let store = FileBookmarkStore::new(&settings.state_path);

        let bookmark = if full { None } else { store.load().await? };
        match bookmark {
            Some(ts) => info!("syncing records updated after {}", odata::format_timestamp(ts)),
            None => info!("no stored bookmark, fetching the full collection"),
        }

        let outcome = client.sync_organizations(bookmark).await?;

        if outcome.is_empty() {
            warn!("no matching records; the stored bookmark is unchanged");
            return Ok(());
        }

        if let Some(count) = outcome.total_count {
            info!("server reported {count} matching records");
        }
        info!(
            "received {} records in {} pages ({} ms)",
            outcome.len(),
            outcome.stats.pages_fetched,
            outcome.stats.duration_ms
        );

        if preview > 0 {
            let shown = outcome.records.iter().take(preview).collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }

        if let Some(new_bookmark) = outcome.new_bookmark {
            if dry_run {
                info!(
                    "dry run: would store bookmark {}",
                    odata::format_timestamp(new_bookmark)
                );
            } else {
                store.store(new_bookmark).await?;
                info!("stored bookmark {}", odata::format_timestamp(new_bookmark));
            }
        }

        Ok(())
    }

    async fn show_state(&self) -> Result<()> {
        let settings = Settings::from_file(&self.cli.settings)?;
        let store = FileBookmarkStore::new(&settings.state_path);

        match store.load().await? {
            Some(bookmark) => println!("{}", odata::format_timestamp(bookmark)),
            None => println!("no bookmark stored"),
        }

        Ok(())
    }
}
