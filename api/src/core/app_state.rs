use std::sync::Arc;

use ai_llm_service::{
    ChatCompletion, config::default_config::config_openai_chat,
    services::open_ai_service::OpenAiService,
};
use entry_store::{ArcEntryStore, new_store, seed::seed_if_empty};
use tracing::{error, info};

use crate::{
    core::{chain::SIMULATED_CHAIN_ID, config::ApiConfig},
    error_handler::AppResult,
};

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where entries are persisted and looked up.
    pub store: ArcEntryStore,
    /// Chat backend that answers questions.
    pub llm: Arc<dyn ChatCompletion>,
}

impl AppState {
    pub fn new(store: ArcEntryStore, llm: Arc<dyn ChatCompletion>) -> Self {
        Self { store, llm }
    }

    /// Build the production state: OpenAI client from env, SQLite store at
    /// `config.database_path`, demo rows seeded on first start.
    ///
    /// A seeding failure is logged and does not abort startup.
    pub async fn from_config(config: &ApiConfig) -> AppResult<Self> {
        let llm = OpenAiService::new(config_openai_chat()?)?;
        let store = new_store(config.database_path.as_deref()).await?;

        seed_demo_entries(&store).await;

        Ok(Self::new(store, Arc::new(llm)))
    }
}

/// Seeds the demo entries on first start; failures are logged, never returned.
pub(crate) async fn seed_demo_entries(store: &ArcEntryStore) {
    match seed_if_empty(store.as_ref(), SIMULATED_CHAIN_ID).await {
        Ok(true) => info!("seed entries inserted"),
        Ok(false) => {}
        Err(e) => error!(error = %e, "error seeding database"),
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use entry_store::{Entry, EntryStore, NewEntry, SqliteEntryStore, StoreError};

    use super::*;

    struct BrokenStore;

    #[async_trait]
    impl EntryStore for BrokenStore {
        async fn create_entry(&self, _entry: NewEntry) -> entry_store::Result<Entry> {
            Err(StoreError::InvalidTimestamp(-1))
        }

        async fn get_entry(&self, _id: i64) -> entry_store::Result<Option<Entry>> {
            Err(StoreError::InvalidTimestamp(-1))
        }
    }

    #[tokio::test]
    async fn seeding_failure_does_not_propagate() {
        let store: ArcEntryStore = Arc::new(BrokenStore);

        seed_demo_entries(&store).await;
    }

    #[tokio::test]
    async fn restart_does_not_duplicate_seed_rows() {
        let store: ArcEntryStore = Arc::new(SqliteEntryStore::open(None).await.unwrap());

        seed_demo_entries(&store).await;
        seed_demo_entries(&store).await;

        let first = store.get_entry(1).await.unwrap().unwrap();
        assert_eq!(first.chain_id, SIMULATED_CHAIN_ID);
        assert!(store.get_entry(2).await.unwrap().is_some());
        assert!(store.get_entry(3).await.unwrap().is_none());
        assert!(store.get_entry(4).await.unwrap().is_none());
    }
}
