//! Tests for feed loading and the keep-stale store contract.

use std::path::Path;

use sched_ingest::{FetchError, SessionStore, load_sessions};

fn write_feed(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("write feed");
    path
}

const FEED: &str = r#"[
  {
    "subject": "Chemistry",
    "topic": "Organic Chemistry",
    "level": "JC2",
    "stream": "JC",
    "tutor": "Mr Tan",
    "centre": "Bukit Timah",
    "date": "24 May",
    "startTime": "10:00 AM",
    "endTime": "1:00 PM"
  },
  {
    "subject": "Math",
    "tutor": "Ms Lim",
    "centre": "Tampines",
    "date": "25 May",
    "startTime": "2:00 PM",
    "endTime": "5:00 PM"
  }
]"#;

#[test]
fn loads_a_feed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_feed(&dir, "sessions.json", FEED);

    let sessions = load_sessions(&path).expect("load");

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].subject, "Chemistry");
    assert_eq!(sessions[1].topic, None);
    assert_eq!(sessions[1].stream, "");
}

#[test]
fn missing_file_is_a_fetch_error() {
    let error = load_sessions(Path::new("/nonexistent/sessions.json")).unwrap_err();
    assert!(matches!(error, FetchError::Io { .. }));
}

#[test]
fn wrong_shape_is_a_fetch_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_feed(&dir, "sessions.json", r#"{"not": "an array"}"#);

    let error = load_sessions(&path).unwrap_err();
    assert!(matches!(error, FetchError::Payload { .. }));
}

#[test]
fn failed_refresh_keeps_the_prior_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_feed(&dir, "sessions.json", FEED);

    let mut store = SessionStore::new();
    assert!(store.refresh(load_sessions(&good)));
    assert_eq!(store.sessions().len(), 2);
    assert!(store.last_error().is_none());

    let replaced = store.refresh(load_sessions(Path::new("/nonexistent/sessions.json")));
    assert!(!replaced);
    assert_eq!(store.sessions().len(), 2, "stale list must survive");
    assert!(store.last_error().is_some());

    // A later success clears the error flag again.
    assert!(store.refresh(load_sessions(&good)));
    assert!(store.last_error().is_none());
}
