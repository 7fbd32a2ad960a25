//! Tests for the TTL cache.

use std::time::Duration;

use chrono::{TimeZone, Utc};

use sched_ingest::{CACHE_TTL, CacheEntry, read_cache, write_cache};
use sched_model::Session;

fn sample_sessions() -> Vec<Session> {
    vec![Session {
        subject: "Physics".to_string(),
        topic: None,
        level: "JC1".to_string(),
        stream: "JC".to_string(),
        tutor: "Ms Lim".to_string(),
        centre: "Tampines".to_string(),
        classroom: None,
        date: "31 May".to_string(),
        start_time: "2:00 PM".to_string(),
        end_time: "5:00 PM".to_string(),
        prefill: None,
        prefill_field: None,
    }]
}

#[test]
fn freshness_respects_the_ttl_boundary() {
    let fetched_at = Utc.with_ymd_and_hms(2025, 5, 24, 10, 0, 0).unwrap();
    let entry = CacheEntry::new(fetched_at, sample_sessions());

    let just_inside = fetched_at + chrono::Duration::seconds(299);
    let at_boundary = fetched_at + chrono::Duration::seconds(300);
    let long_after = fetched_at + chrono::Duration::hours(1);

    assert!(entry.is_fresh(just_inside, CACHE_TTL));
    assert!(!entry.is_fresh(at_boundary, CACHE_TTL));
    assert!(!entry.is_fresh(long_after, CACHE_TTL));
}

#[test]
fn a_clock_that_went_backwards_is_stale() {
    let fetched_at = Utc.with_ymd_and_hms(2025, 5, 24, 10, 0, 0).unwrap();
    let entry = CacheEntry::new(fetched_at, sample_sessions());

    let before_fetch = fetched_at - chrono::Duration::seconds(1);
    assert!(!entry.is_fresh(before_fetch, CACHE_TTL));
}

#[test]
fn round_trips_through_the_cache_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cache").join("sessions.json");
    let fetched_at = Utc.with_ymd_and_hms(2025, 5, 24, 10, 0, 0).unwrap();
    let entry = CacheEntry::new(fetched_at, sample_sessions());

    write_cache(&path, &entry).expect("write cache");
    let read: CacheEntry<Vec<Session>> = read_cache(&path).expect("read cache");

    assert_eq!(read.fetched_at, fetched_at);
    assert_eq!(read.payload, entry.payload);
}

#[test]
fn unreadable_cache_is_a_miss_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sessions.json");
    std::fs::write(&path, "not json").expect("write");

    let missing: Option<CacheEntry<Vec<Session>>> = read_cache(&path);
    assert!(missing.is_none());

    let absent: Option<CacheEntry<Vec<Session>>> =
        read_cache(&dir.path().join("never-written.json"));
    assert!(absent.is_none());

    // TTL constant sanity: five minutes.
    assert_eq!(CACHE_TTL, Duration::from_secs(300));
}
