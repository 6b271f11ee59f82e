use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored question/answer record with simulated chain metadata.
///
/// Entries are immutable once created; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub chain_id: String,
    pub block_height: i64,
    pub timestamp: DateTime<Utc>,
}

/// Fields supplied by the caller when creating an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub question: String,
    pub answer: String,
    pub chain_id: String,
    pub block_height: i64,
}
