//! # AMS Sync
//!
//! Incremental synchronization client for OData-style paginated membership
//! APIs. Given the high-water-mark timestamp from a previous run, fetch every
//! record updated since that mark, across as many pages as required, and hand
//! the accumulated set plus a proposed new bookmark back to the caller.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ams_sync::auth::AuthConfig;
//! use ams_sync::http::{ClientConfig, HttpClient};
//! use ams_sync::state::{BookmarkStore, FileBookmarkStore};
//! use ams_sync::sync::SyncClient;
//! use ams_sync::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_url("https://api.ams.example.org")
//!         .build();
//!     let http = HttpClient::with_auth(config, AuthConfig::legacy_bearer("user", "pass"));
//!     let client = SyncClient::new(http);
//!
//!     let store = FileBookmarkStore::new("state.json");
//!     let bookmark = store.load().await?;
//!
//!     let outcome = client.sync_organizations(bookmark).await?;
//!     if let Some(new_bookmark) = outcome.new_bookmark {
//!         store.store(new_bookmark).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bookmark ──► $filter clause ──► page loop ──► Vec<Record> + new bookmark
//!                                    │
//!                     ┌──────────┬───┴───────┬──────────┐
//!                     │   Auth   │   HTTP    │ Paginate │
//!                     ├──────────┼───────────┼──────────┤
//!                     │ Basic    │ GET       │ Offset   │
//!                     │ Bearer   │ gzip      │ $top     │
//!                     │ Legacy   │ timeout   │ $skip    │
//!                     └──────────┴───────────┴──────────┘
//! ```
//!
//! The caller owns persistence: the sync engine never writes the bookmark
//! itself, it only proposes one.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::needless_pass_by_value)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Domain records and the sync-record capability
pub mod model;

/// Authentication schemes and header construction
pub mod auth;

/// HTTP client with fixed timeout and response decompression
pub mod http;

/// OData query option building
pub mod odata;

/// Page envelope decoding
pub mod decode;

/// Offset pagination and termination tracking
pub mod pagination;

/// Bookmark persistence
pub mod state;

/// The incremental sync engine
pub mod sync;

/// Runtime settings loaded from YAML
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use model::{MailingAddress, Organization, SyncRecord};
pub use sync::{SyncClient, SyncOutcome, DEFAULT_PAGE_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
