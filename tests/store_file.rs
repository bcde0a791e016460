use serde_json::{Value, json};
use tempfile::tempdir;

use school_admin::domain::document::Collection;
use school_admin::domain::repositories::DocumentStore;
use school_admin::error::StoreError;
use school_admin::infrastructure::persistence::MemoryDocumentStore;

fn fields(value: Value) -> serde_json::Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_open_missing_file_starts_empty() {
    let dir = tempdir().unwrap();
    let store = MemoryDocumentStore::open(dir.path().join("school.json"))
        .await
        .unwrap();

    for collection in Collection::ALL {
        assert!(store.list_all(collection).await.unwrap().is_empty());
    }
    assert!(store.ping().await.is_ok());
}

#[tokio::test]
async fn test_writes_survive_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school.json");

    let store = MemoryDocumentStore::open(&path).await.unwrap();
    let id = store
        .create(
            Collection::Fees,
            fields(json!({ "title": "Bus", "amount": 100.0, "type": "monthly" })),
        )
        .await
        .unwrap();
    store
        .update(Collection::Fees, &id, fields(json!({ "amount": 120.0 })))
        .await
        .unwrap();
    drop(store);

    let reopened = MemoryDocumentStore::open(&path).await.unwrap();
    let docs = reopened.list_all(Collection::Fees).await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].id, id);
    assert_eq!(docs[0].fields["amount"], 120.0);
    assert_eq!(docs[0].fields["title"], "Bus");
}

#[tokio::test]
async fn test_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school.json");

    let store = MemoryDocumentStore::open(&path).await.unwrap();
    let id = store
        .create(Collection::Users, fields(json!({ "name": "Amal", "role": "admin" })))
        .await
        .unwrap();

    let contents: Value =
        serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();

    assert_eq!(contents["users"][0]["id"], id);
    assert_eq!(contents["users"][0]["name"], "Amal");
    assert_eq!(contents["fees"], json!([]));
    assert!(!dir.path().join("school.json.tmp").exists());
}

#[tokio::test]
async fn test_delete_is_persisted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school.json");
    tokio::fs::write(
        &path,
        json!({ "students": [ { "id": "s1", "name": "Layla" } ] }).to_string(),
    )
    .await
    .unwrap();

    let store = MemoryDocumentStore::open(&path).await.unwrap();
    store.delete(Collection::Students, "s1").await.unwrap();
    drop(store);

    let reopened = MemoryDocumentStore::open(&path).await.unwrap();
    assert!(reopened.list_all(Collection::Students).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("school.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let result = MemoryDocumentStore::open(&path).await;

    assert!(matches!(result, Err(StoreError::Serialization(_))));
}

#[tokio::test]
async fn test_failed_write_is_rolled_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("school.json");

    let store = MemoryDocumentStore::open(&path).await.unwrap();
    let result = store
        .create(Collection::Users, fields(json!({ "name": "Amal", "role": "admin" })))
        .await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert!(store.list_all(Collection::Users).await.unwrap().is_empty());
    assert!(store.ping().await.is_err());
}

#[cfg(unix)]
#[tokio::test]
async fn test_unreadable_file_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("school.json");
    tokio::fs::write(&path, json!({ "users": [] }).to_string())
        .await
        .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through file modes.
    if std::fs::read(&path).is_ok() {
        return;
    }

    let result = MemoryDocumentStore::open(&path).await;

    assert!(matches!(result, Err(StoreError::PermissionDenied(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn test_read_only_directory_write_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    std::fs::create_dir(&locked).unwrap();
    let path = locked.join("school.json");

    let store = MemoryDocumentStore::open(&path).await.unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

    if std::fs::write(locked.join("write-check"), b"").is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let result = store
        .create(Collection::Users, fields(json!({ "name": "Amal", "role": "admin" })))
        .await;
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(StoreError::PermissionDenied(_))));
    assert!(store.list_all(Collection::Users).await.unwrap().is_empty());
}
