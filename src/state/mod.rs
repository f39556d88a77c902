//! Bookmark persistence
//!
//! The bookmark is the last-synchronized timestamp watermark. The sync engine
//! reads it once at the start of a run and proposes a new value at the end;
//! persistence is the caller's decision, made only after a run completes with
//! a non-empty result.

mod store;

pub use store::{BookmarkStore, FileBookmarkStore, InMemoryBookmarkStore};

#[cfg(test)]
mod tests;
