//! Integration tests for the flat file store.

use chrono::{TimeZone, Utc};
use hardcore_revival_core::position::{AltarKey, BlockPos};
use hardcore_revival_core::repository::RevivalRepository;
use hardcore_revival_store::FlatFileStore;
use uuid::Uuid;

#[tokio::test]
async fn test_open_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plugins").join("HardcoreRevival").join("data.yml");

    let store = FlatFileStore::open(&path).await;

    assert!(path.exists());
    assert!(store.snapshot().await.unwrap().pending_revivals.is_empty());
}

#[tokio::test]
async fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yml");
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let altar = AltarKey::for_centre(&BlockPos::new("world", 10, 64, -3));
    let used_at = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();

    let store = FlatFileStore::open(&path).await;
    store.add_pending_revival(first).await.unwrap();
    store.add_pending_revival(second).await.unwrap();
    store.record_use(&altar, used_at).await.unwrap();
    let saved = store.snapshot().await.unwrap();
    drop(store);

    let reopened = FlatFileStore::open(&path).await;

    assert_eq!(reopened.snapshot().await.unwrap(), saved);
    assert_eq!(reopened.last_used(&altar).await.unwrap(), Some(used_at));
    assert!(reopened.is_pending_revival(first).await.unwrap());
}

#[tokio::test]
async fn test_every_mutation_is_written_immediately() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yml");
    let player = Uuid::new_v4();

    let store = FlatFileStore::open(&path).await;
    store.add_pending_revival(player).await.unwrap();
    let after_add = std::fs::read_to_string(&path).unwrap();
    store.remove_pending_revival(player).await.unwrap();
    let after_remove = std::fs::read_to_string(&path).unwrap();

    assert!(after_add.contains(&player.to_string()));
    assert!(!after_remove.contains(&player.to_string()));
}

#[tokio::test]
async fn test_pending_revival_is_never_duplicated() {
    let dir = tempfile::tempdir().unwrap();
    let store = FlatFileStore::open(dir.path().join("data.yml")).await;
    let player = Uuid::new_v4();

    assert!(store.add_pending_revival(player).await.unwrap());
    assert!(!store.add_pending_revival(player).await.unwrap());
    assert!(store.remove_pending_revival(player).await.unwrap());
    assert!(!store.remove_pending_revival(player).await.unwrap());
}

#[tokio::test]
async fn test_corrupt_entries_are_skipped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yml");
    let valid = Uuid::new_v4();
    std::fs::write(
        &path,
        format!(
            "pendingRevives:\n- {valid}\n- garbage\n\
             cooldowns:\n  world:1:2:3: 99\n  broken: [1]\n"
        ),
    )
    .unwrap();

    let store = FlatFileStore::open(&path).await;
    let snapshot = store.snapshot().await.unwrap();

    assert_eq!(snapshot.pending_revivals.len(), 1);
    assert!(snapshot.pending_revivals.contains(&valid));
    assert_eq!(snapshot.cooldowns.len(), 1);
}

#[tokio::test]
async fn test_unparseable_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.yml");
    std::fs::write(&path, "pendingRevives: [oops\n").unwrap();

    let store = FlatFileStore::open(&path).await;

    assert!(store.snapshot().await.unwrap().pending_revivals.is_empty());
}

#[tokio::test]
async fn test_write_failure_is_swallowed_but_flush_reports_it() {
    let dir = tempfile::tempdir().unwrap();
    // The parent "directory" is a regular file, so every write fails.
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();
    let store = FlatFileStore::open(blocker.join("data.yml")).await;
    let player = Uuid::new_v4();

    assert!(store.add_pending_revival(player).await.unwrap());
    assert!(store.is_pending_revival(player).await.unwrap());
    assert!(store.flush().await.is_err());
}
