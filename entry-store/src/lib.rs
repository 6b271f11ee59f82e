//! Entry persistence for LineraMind.
//!
//! - [`EntryStore`]: insert-and-lookup contract the API depends on.
//! - [`sqlite::SqliteEntryStore`]: SQLite backend (file or in-memory).
//! - [`seed::seed_if_empty`]: inserts the demo rows on first start.

pub mod entry;
pub mod errors;
pub mod seed;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

pub use entry::{Entry, NewEntry};
pub use errors::{Result, StoreError};
pub use sqlite::SqliteEntryStore;

#[async_trait]
pub trait EntryStore {
    /// Persists a new entry and returns it with its assigned id and timestamp.
    async fn create_entry(&self, entry: NewEntry) -> Result<Entry>;

    /// Looks up an entry; a missing id is `Ok(None)`.
    async fn get_entry(&self, id: i64) -> Result<Option<Entry>>;
}

pub type ArcEntryStore = Arc<dyn EntryStore + Send + Sync>;

/// Opens the SQLite store at `path` (`None` or `":memory:"` for in-memory).
pub async fn new_store(path: Option<&str>) -> Result<ArcEntryStore> {
    let path = path.filter(|p| *p != ":memory:");
    Ok(Arc::new(SqliteEntryStore::open(path).await?))
}
