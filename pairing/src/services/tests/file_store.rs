//! Tests for the JSON file backend
//!
//! Every test works in its own temporary directory.

use tempfile::TempDir;
use tokio::fs;

use crate::error::PairingError;
use crate::services::JsonFileStore;
use crate::traits::DocumentStore;

fn store_in(dir: &TempDir, name: &str) -> JsonFileStore {
    JsonFileStore::new(dir.path().join(name))
}

#[tokio::test]
async fn test_missing_file_loads_as_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, "pairing-history.json");

    assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("data").join("completions.json"));

    store.save("{}").await.unwrap();

    assert!(store.path().exists());
    assert_eq!(store.load().await.unwrap().as_deref(), Some("{}"));
}

#[tokio::test]
async fn test_save_overwrites_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, "history.json");

    store.save(r#"{"first": true}"#).await.unwrap();
    store.save(r#"{"second": true}"#).await.unwrap();

    let contents = fs::read_to_string(store.path()).await.unwrap();
    assert_eq!(contents, r#"{"second": true}"#);
    assert!(!dir.path().join("history.json.tmp").exists());
}

#[tokio::test]
async fn test_failed_save_keeps_previous_document() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir, "history.json");
    store.save("{\"kept\": 1}").await.unwrap();

    // A directory squatting on the temp path makes the write fail
    fs::create_dir(dir.path().join("history.json.tmp")).await.unwrap();
    let result = store.save("{\"lost\": 2}").await;

    assert!(matches!(result, Err(PairingError::Storage { .. })));
    assert_eq!(store.load().await.unwrap().as_deref(), Some("{\"kept\": 1}"));
}

#[tokio::test]
async fn test_unreadable_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    // The target path is a directory, so reading it fails with something other than NotFound
    let store = JsonFileStore::new(dir.path());

    assert!(store.load().await.is_err());
}
