use super::*;

fn new_entry(question: &str, block_height: i64) -> NewEntry {
    NewEntry {
        question: question.to_string(),
        answer: format!("answer to {question}"),
        chain_id: "chain".to_string(),
        block_height,
    }
}

#[tokio::test]
async fn test_create_then_get() {
    let db = SqliteEntryStore::open(None).await.unwrap();

    let created = db.create_entry(new_entry("What is Linera?", 17)).await.unwrap();
    assert_eq!(created.question, "What is Linera?");
    assert_eq!(created.answer, "answer to What is Linera?");
    assert_eq!(created.chain_id, "chain");
    assert_eq!(created.block_height, 17);

    let fetched = db.get_entry(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_ids_are_distinct_and_increasing() {
    let db = SqliteEntryStore::open(None).await.unwrap();

    let mut last = 0;
    for i in 0..5 {
        let entry = db.create_entry(new_entry(&format!("q{i}"), i)).await.unwrap();
        assert!(entry.id > last);
        last = entry.id;
    }
}

#[tokio::test]
async fn test_missing_id_is_none() {
    let db = SqliteEntryStore::open(None).await.unwrap();
    db.create_entry(new_entry("q", 1)).await.unwrap();

    assert_eq!(db.get_entry(-1).await.unwrap(), None);
    assert_eq!(db.get_entry(0).await.unwrap(), None);
    assert_eq!(db.get_entry(i64::MAX).await.unwrap(), None);
}

#[tokio::test]
async fn test_migration_is_idempotent() {
    let db = SqliteEntryStore::open(None).await.unwrap();
    let created = db.create_entry(new_entry("q", 1)).await.unwrap();

    db.run_migration().await.unwrap();

    assert_eq!(db.get_entry(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let path = std::env::temp_dir().join(format!(
        "entry-store-test-{}-{}.db",
        std::process::id(),
        Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ));
    let path_str = path.to_str().unwrap().to_string();

    let created = {
        let db = SqliteEntryStore::open(Some(&path_str)).await.unwrap();
        db.create_entry(new_entry("persisted", 3)).await.unwrap()
    };

    let db = SqliteEntryStore::open(Some(&path_str)).await.unwrap();
    assert_eq!(db.get_entry(created.id).await.unwrap(), Some(created));

    drop(db);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_open_unwritable_path_is_an_error() {
    let path = std::env::temp_dir()
        .join(format!("entry-store-missing-{}", std::process::id()))
        .join("nested")
        .join("entries.db");

    let res = SqliteEntryStore::open(path.to_str()).await;

    assert!(matches!(res, Err(StoreError::Open(_))));
}
