//! Bookmark store implementations
//!
//! File persistence writes to a temp file and renames, so a crash mid-write
//! never leaves a truncated state file behind.

use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Supplies the starting bookmark and persists the proposed new one
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Load the stored bookmark; `None` means no sync has completed yet
    async fn load(&self) -> Result<Option<DateTime<Utc>>>;

    /// Persist a new bookmark
    async fn store(&self, bookmark: DateTime<Utc>) -> Result<()>;
}

/// Serialized form of the bookmark file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BookmarkState {
    #[serde(default)]
    last_update_date: Option<DateTime<Utc>>,
}

/// File-backed bookmark store
#[derive(Debug, Clone)]
pub struct FileBookmarkStore {
    path: PathBuf,
}

impl FileBookmarkStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BookmarkStore for FileBookmarkStore {
    async fn load(&self) -> Result<Option<DateTime<Utc>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::State {
                message: format!("Failed to read state file: {e}"),
            })?;

        let state: BookmarkState = serde_json::from_str(&contents).map_err(|e| Error::State {
            message: format!("Failed to parse state file: {e}"),
        })?;

        Ok(state.last_update_date)
    }

    async fn store(&self, bookmark: DateTime<Utc>) -> Result<()> {
        let state = BookmarkState {
            last_update_date: Some(bookmark),
        };
        let contents = serde_json::to_string_pretty(&state).map_err(|e| Error::State {
            message: format!("Failed to serialize state: {e}"),
        })?;

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::State {
                message: format!("Failed to write state file: {e}"),
            })?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::State {
                message: format!("Failed to rename state file: {e}"),
            })?;

        Ok(())
    }
}

/// In-memory bookmark store for tests and embedded use
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookmarkStore {
    inner: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl InMemoryBookmarkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a bookmark
    pub fn with_bookmark(bookmark: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(bookmark))),
        }
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn load(&self) -> Result<Option<DateTime<Utc>>> {
        Ok(*self.inner.read().await)
    }

    async fn store(&self, bookmark: DateTime<Utc>) -> Result<()> {
        *self.inner.write().await = Some(bookmark);
        Ok(())
    }
}
