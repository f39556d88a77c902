//! Tests for bookmark stores

use super::*;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_file_store_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBookmarkStore::new(dir.path().join("state.json"));
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_file_store_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBookmarkStore::new(dir.path().join("state.json"));

    let bookmark = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    store.store(bookmark).await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some(bookmark));
}

#[tokio::test]
async fn test_file_store_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBookmarkStore::new(dir.path().join("state.json"));

    let first = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    store.store(first).await.unwrap();
    store.store(second).await.unwrap();

    assert_eq!(store.load().await.unwrap(), Some(second));
    // no stray temp file left behind
    assert!(!dir.path().join("state.tmp").exists());
}

#[tokio::test]
async fn test_file_store_corrupt_file_is_state_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{broken").unwrap();

    let store = FileBookmarkStore::new(&path);
    let err = store.load().await.unwrap_err();
    assert_eq!(err.kind(), crate::error::ErrorKind::State);
}

#[tokio::test]
async fn test_in_memory_store() {
    let store = InMemoryBookmarkStore::new();
    assert_eq!(store.load().await.unwrap(), None);

    let bookmark = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
    store.store(bookmark).await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(bookmark));
}

#[tokio::test]
async fn test_in_memory_store_seeded() {
    let bookmark = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
    let store = InMemoryBookmarkStore::with_bookmark(bookmark);
    assert_eq!(store.load().await.unwrap(), Some(bookmark));
}
