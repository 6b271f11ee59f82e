//! Demo rows inserted on first start.

use tracing::info;

use crate::{EntryStore, NewEntry, errors::Result};

/// Id whose presence marks the database as already seeded.
const SEED_MARKER_ID: i64 = 1;

const SEED_ROWS: [(&str, &str, i64); 2] = [
    (
        "What is Linera?",
        "Linera is a decentralized protocol designed for high-performance, low-latency applications. It uses microchains to allow parallel execution of operations, enabling web2-like responsiveness on a blockchain.",
        100,
    ),
    (
        "Why is real-time important?",
        "Real-time execution ensures that user interactions are confirmed instantly, preventing the lag typical of traditional blockchains. This is crucial for applications like payments, gaming, and messaging.",
        101,
    ),
];

/// Inserts the demo entries unless an entry with id 1 already exists.
///
/// Returns `true` when rows were inserted.
pub async fn seed_if_empty<S>(store: &S, chain_id: &str) -> Result<bool>
where
    S: EntryStore + Send + Sync + ?Sized,
{
    if store.get_entry(SEED_MARKER_ID).await?.is_some() {
        return Ok(false);
    }

    info!("seeding database");
    for (question, answer, block_height) in SEED_ROWS {
        store
            .create_entry(NewEntry {
                question: question.to_string(),
                answer: answer.to_string(),
                chain_id: chain_id.to_string(),
                block_height,
            })
            .await?;
    }
    Ok(true)
}
