#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_rusqlite::{Connection, OpenFlags, named_params, params};
use tracing::{debug, info, instrument};

use crate::{
    EntryStore,
    entry::{Entry, NewEntry},
    errors::{Result, StoreError},
};

use super::migration::MIGRATION;

/// SQLite-backed [`EntryStore`].
///
/// All statements run on the tokio-rusqlite worker thread that owns the
/// connection, so inserts are serialized and `last_insert_rowid` is exact.
pub struct SqliteEntryStore {
    conn: Connection,
}

impl SqliteEntryStore {
    /// Opens (or creates) the database at `path`, or an in-memory one for `None`,
    /// and applies the schema.
    pub async fn open(path: Option<&str>) -> Result<Self> {
        let conn = match path {
            Some(path) => {
                Connection::open_with_flags(
                    path,
                    OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
                )
                .await?
            }
            None => Connection::open_in_memory().await?,
        };

        let store = Self { conn };
        store.run_migration().await?;
        info!(path = path.unwrap_or(":memory:"), "entry store ready");
        Ok(store)
    }

    async fn run_migration(&self) -> Result<()> {
        self.conn
            .call(|conn| Ok(conn.execute_batch(MIGRATION)?))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl EntryStore for SqliteEntryStore {
    #[instrument(skip_all, fields(block_height = entry.block_height))]
    async fn create_entry(&self, entry: NewEntry) -> Result<Entry> {
        // Millisecond precision so the returned value equals what a later read yields.
        let millis = Utc::now().timestamp_millis();
        let timestamp = to_datetime(millis)?;

        let row = entry.clone();
        let id = self
            .conn
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO entries (question, answer, chain_id, block_height, timestamp) \
                     VALUES (:question, :answer, :chain_id, :block_height, :timestamp)",
                    named_params! {
                        ":question": row.question,
                        ":answer": row.answer,
                        ":chain_id": row.chain_id,
                        ":block_height": row.block_height,
                        ":timestamp": millis,
                    },
                )?;
                Ok(conn.last_insert_rowid())
            })
            .await?;

        debug!(id, "entry inserted");

        Ok(Entry {
            id,
            question: entry.question,
            answer: entry.answer,
            chain_id: entry.chain_id,
            block_height: entry.block_height,
            timestamp,
        })
    }

    #[instrument(skip(self))]
    async fn get_entry(&self, id: i64) -> Result<Option<Entry>> {
        let row = self
            .conn
            .call(move |conn| {
                let mut stmt = conn.prepare(
                    "SELECT id, question, answer, chain_id, block_height, timestamp \
                     FROM entries WHERE id = ?",
                )?;
                let mut rows = stmt.query(params![id])?;

                let Some(row) = rows.next()? else {
                    return Ok(None);
                };
                Ok(Some(RawEntry {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    chain_id: row.get(3)?,
                    block_height: row.get(4)?,
                    timestamp: row.get(5)?,
                }))
            })
            .await?;

        row.map(RawEntry::into_entry).transpose()
    }
}

/// Row as stored, before the timestamp is decoded.
struct RawEntry {
    id: i64,
    question: String,
    answer: String,
    chain_id: String,
    block_height: i64,
    timestamp: i64,
}

impl RawEntry {
    fn into_entry(self) -> Result<Entry> {
        Ok(Entry {
            id: self.id,
            question: self.question,
            answer: self.answer,
            chain_id: self.chain_id,
            block_height: self.block_height,
            timestamp: to_datetime(self.timestamp)?,
        })
    }
}

fn to_datetime(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(StoreError::InvalidTimestamp(millis))
}
