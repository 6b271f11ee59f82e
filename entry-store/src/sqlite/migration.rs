pub(crate) const MIGRATION: &str = r#"
    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        chain_id TEXT NOT NULL,
        block_height INTEGER NOT NULL,
        timestamp INTEGER NOT NULL
    );
"#;
