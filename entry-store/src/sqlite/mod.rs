pub(crate) mod migration;
mod store;

pub use store::SqliteEntryStore;
