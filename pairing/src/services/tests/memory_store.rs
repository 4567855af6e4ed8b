use crate::services::MemoryStore;
use crate::traits::DocumentStore;

#[tokio::test]
async fn test_empty_store_loads_nothing() {
    let store = MemoryStore::new();
    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_save_replaces_contents() {
    let store = MemoryStore::with_contents("{}");

    store.save(r#"{"g1": {}}"#).await.unwrap();

    assert_eq!(store.load().await.unwrap().as_deref(), Some(r#"{"g1": {}}"#));
    assert_eq!(store.describe(), "memory");
}
