// tests/history_store.rs

use sqlx::sqlite::SqlitePoolOptions;

use quickcalc::history::HistoryStore;

async fn memory_store(cap: i64) -> HistoryStore {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("create in-memory sqlite");
    let store = HistoryStore::new(pool, cap);
    store.init_schema().await.expect("init schema");
    store
}

#[tokio::test]
async fn test_record_and_recent_ordering() {
    let store = memory_store(20).await;

    store.record("s1", "1 + 1", "2").await.unwrap();
    store.record("s1", "2 + 2", "4").await.unwrap();
    store.record("s1", "3 + 3", "6").await.unwrap();

    let entries = store.recent("s1", 2).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].expression, "3 + 3");
    assert_eq!(entries[0].result, "6");
    assert_eq!(entries[1].expression, "2 + 2");
}

#[tokio::test]
async fn test_history_is_bounded_per_session() {
    let store = memory_store(3).await;

    for i in 0..5 {
        store
            .record("s1", &format!("{i} + 0"), &i.to_string())
            .await
            .unwrap();
    }

    let entries = store.recent("s1", 10).await.unwrap();
    assert_eq!(entries.len(), 3);
    // The two oldest rows were pruned.
    assert_eq!(entries[0].expression, "4 + 0");
    assert_eq!(entries[2].expression, "2 + 0");
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let store = memory_store(20).await;

    store.record("alice", "1 + 1", "2").await.unwrap();
    store.record("bob", "5 * 5", "25").await.unwrap();

    let alice = store.recent("alice", 10).await.unwrap();
    assert_eq!(alice.len(), 1);
    assert_eq!(alice[0].expression, "1 + 1");

    let bob = store.recent("bob", 10).await.unwrap();
    assert_eq!(bob.len(), 1);
    assert_eq!(bob[0].expression, "5 * 5");

    // Pruning one session never touches another.
    let store = memory_store(1).await;
    store.record("a", "1 + 1", "2").await.unwrap();
    store.record("b", "2 + 2", "4").await.unwrap();
    assert_eq!(store.recent("a", 10).await.unwrap().len(), 1);
    assert_eq!(store.recent("b", 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_clear_session() {
    let store = memory_store(20).await;

    store.record("s1", "1 + 1", "2").await.unwrap();
    store.record("s2", "2 + 2", "4").await.unwrap();

    store.clear("s1").await.unwrap();

    assert_eq!(store.recent("s1", 10).await.unwrap().len(), 0);
    assert_eq!(store.recent("s2", 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calc.db");
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let store = HistoryStore::connect(&url).await.unwrap();
    store.record("s1", "1 + 1", "2").await.unwrap();

    assert_eq!(store.recent("s1", 10).await.unwrap().len(), 1);
    assert!(path.exists());
}

#[tokio::test]
async fn test_entries_carry_timestamps() {
    let store = memory_store(20).await;
    store.record("s1", "1 + 1", "2").await.unwrap();

    let entries = store.recent("s1", 1).await.unwrap();
    assert!(entries[0].ts > 0);
    assert!(entries[0].timestamp().is_some());
}
