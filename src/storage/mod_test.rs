// Tests for load/save over a backend
// Test cases:
// - Absent blob loads as an empty store
// - Save then load round-trips entries and order
// - Legacy blob migrates on load and persists the migrated shape
// - A second load after migration changes nothing
// - Malformed blob fails the load

use super::*;
use crate::store::AddStatus;
use tempfile::TempDir;

/// Helper to create a backend rooted in a temporary directory
fn create_test_backend() -> (FileBackend, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let backend = FileBackend::new(temp_dir.path().join("wordstore.json"));
    (backend, temp_dir)
}

#[tokio::test]
async fn test_absent_blob_loads_empty_store() {
    let (backend, _temp_dir) = create_test_backend();

    let store = load_store(&backend).await.unwrap();

    assert!(store.is_empty());
}

#[tokio::test]
async fn test_save_then_load_round_trips() {
    let (backend, _temp_dir) = create_test_backend();

    let mut store = WordStore::new();
    assert_eq!(store.add("Hello", 1024), AddStatus::Added);
    assert_eq!(store.add("World", 1024), AddStatus::Added);
    save_store(&backend, &store).await.unwrap();

    let reloaded = load_store(&backend).await.unwrap();
    assert_eq!(reloaded, store);
}

#[tokio::test]
async fn test_legacy_blob_migrates_and_persists() {
    let (backend, _temp_dir) = create_test_backend();
    backend.write_blob(r#"{"hello":"Hello"}"#).await.unwrap();

    let store = load_store(&backend).await.unwrap();
    let entry = store.get("hello").unwrap();
    assert_eq!(entry.text, "Hello");
    assert!(entry.added_at > 0);

    // The migrated shape was written back
    let blob = backend.read_blob().await.unwrap().unwrap();
    assert!(blob.contains(r#""hello":["Hello","#));

    // A second load is a no-op
    let again = load_store(&backend).await.unwrap();
    assert_eq!(again, store);
}

#[tokio::test]
async fn test_malformed_blob_fails_the_load() {
    let (backend, _temp_dir) = create_test_backend();
    backend.write_blob("definitely not json").await.unwrap();

    assert!(matches!(
        load_store(&backend).await,
        Err(WordStoreError::MalformedStore(_))
    ));
}
