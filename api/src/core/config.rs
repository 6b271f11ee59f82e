/// Listen address when `API_ADDRESS` is unset.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:5000";
/// Database file when `DATABASE_PATH` is unset.
pub const DEFAULT_DATABASE_PATH: &str = "linera_mind.db";

/// Server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind, e.g. `127.0.0.1:5000`.
    pub address: String,
    /// SQLite file path; `None` keeps the database in memory.
    pub database_path: Option<String>,
}

impl ApiConfig {
    /// Load settings from environment variables, falling back to defaults.
    ///
    /// `DATABASE_PATH=:memory:` selects an in-memory database.
    pub fn from_env() -> Self {
        let address = env_or("API_ADDRESS", DEFAULT_API_ADDRESS);
        let database_path = env_or("DATABASE_PATH", DEFAULT_DATABASE_PATH);

        Self {
            address,
            database_path: (database_path != ":memory:").then_some(database_path),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
