use std::path::PathBuf;

use needledrop::management::SessionLogManager;
use needledrop::types::{SessionRecord, SessionTrack};

fn temp_log_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "needledrop-test-{}-{}.jsonl",
        name,
        std::process::id()
    ));
    path
}

fn create_record(album: &str, scrobbled_at: i64) -> SessionRecord {
    SessionRecord {
        scrobbled_at,
        artist: "Artist".to_string(),
        album: album.to_string(),
        source_url: "https://www.discogs.com/release/1".to_string(),
        tracks: vec![SessionTrack {
            position: "A1".to_string(),
            title: "Opener".to_string(),
            duration_secs: 215,
        }],
    }
}

#[tokio::test]
async fn test_session_log_round_trip() {
    let path = temp_log_path("round-trip");
    let _ = async_fs::remove_file(&path).await;

    let manager = SessionLogManager::with_path(path.clone());
    manager.append(&create_record("First", 1_000)).await.unwrap();
    manager.append(&create_record("Second", 2_000)).await.unwrap();

    let records = manager.load().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].album, "First");
    assert_eq!(records[1].album, "Second");
    assert_eq!(records[1].scrobbled_at, 2_000);
    assert_eq!(records[0].tracks[0].duration_secs, 215);

    let _ = async_fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_session_log_append_preserves_existing_lines() {
    let path = temp_log_path("preserve");
    let _ = async_fs::remove_file(&path).await;

    // A log written by an earlier run
    let existing = serde_json::to_string(&create_record("Earlier", 500)).unwrap();
    async_fs::write(&path, format!("{existing}\n")).await.unwrap();

    let manager = SessionLogManager::with_path(path.clone());
    manager.append(&create_record("Later", 1_500)).await.unwrap();

    let records = manager.load().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].album, "Earlier");
    assert_eq!(records[1].album, "Later");

    let _ = async_fs::remove_file(&path).await;
}

#[tokio::test]
async fn test_session_log_missing_file_is_empty() {
    let manager = SessionLogManager::with_path(temp_log_path("missing"));
    let records = manager.load().await.unwrap();
    assert!(records.is_empty());
}
