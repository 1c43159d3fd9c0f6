//! Tests for the filesystem-backed storage backend

use notebook_fs::{ConfigLocation, LocalStorage, StorageBackend};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[tokio::test]
async fn write_then_read_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new();
    let location = ConfigLocation::new(temp_dir.path(), "notebook.yml");

    storage
        .write_text(&location, "version: 1\nvaults: []\n")
        .await
        .unwrap();

    assert!(storage.exists(&location).await);
    assert_eq!(
        storage.read_text(&location).await.unwrap(),
        "version: 1\nvaults: []\n"
    );
}

#[tokio::test]
async fn write_replaces_existing_content() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new();
    let location = ConfigLocation::new(temp_dir.path(), "notebook.yml");

    storage.write_text(&location, "version: 1\n").await.unwrap();
    storage.write_text(&location, "version: 2\n").await.unwrap();

    assert_eq!(storage.read_text(&location).await.unwrap(), "version: 2\n");
}

#[tokio::test]
async fn write_creates_missing_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new();
    let nested_root = temp_dir.path().join("a/b");
    let location = ConfigLocation::new(&nested_root, "notebook.yml");

    storage.write_text(&location, "version: 1\n").await.unwrap();
    assert!(nested_root.join("notebook.yml").is_file());
}

#[tokio::test]
async fn write_leaves_no_temp_file_behind() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new();
    let location = ConfigLocation::new(temp_dir.path(), "notebook.yml");

    storage.write_text(&location, "version: 1\n").await.unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("notebook.yml")]);
}

#[tokio::test]
async fn read_missing_file_reports_the_path() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new();
    let location = ConfigLocation::new(temp_dir.path(), "notebook.yml");

    assert!(!storage.exists(&location).await);

    let err = storage.read_text(&location).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(format!("{}", err).contains("notebook.yml"));
}
