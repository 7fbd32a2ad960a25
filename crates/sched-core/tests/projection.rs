//! Tests for event projection.

use chrono::{NaiveDate, NaiveDateTime};

use sched_core::color::SubjectPalette;
use sched_core::datetime::MalformedTimeError;
use sched_core::project::{
    DEFAULT_EPOCH_YEAR, project_session, project_sessions, project_slot, project_slots,
    week_anchor,
};
use sched_model::{Session, WeeklyClassSlot};

fn dated(subject: &str, date: &str, start: &str, end: &str) -> Session {
    Session {
        subject: subject.to_string(),
        topic: Some("Revision".to_string()),
        level: "JC2".to_string(),
        stream: "JC".to_string(),
        tutor: "Mr Tan".to_string(),
        centre: "Bukit Timah".to_string(),
        classroom: None,
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        prefill: None,
        prefill_field: None,
    }
}

fn slot(day: u8, start: &str, end: &str) -> WeeklyClassSlot {
    WeeklyClassSlot {
        title: "Sec 3 Chemistry".to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        subject: "Chemistry".to_string(),
        tutor: "Mr Ong".to_string(),
        centre: "Jurong".to_string(),
        stream: "Secondary".to_string(),
        level: "Sec 3".to_string(),
        prefill_link: String::new(),
    }
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).expect("valid time")
}

#[test]
fn dated_session_round_trip() {
    let session = dated("Chemistry", "24 May", "10:00 AM", "1:00 PM");
    let palette = SubjectPalette::assign(["Chemistry"]);

    let event = project_session(&session, 2025, &palette).expect("projects");

    let day = NaiveDate::from_ymd_opt(2025, 5, 24).unwrap();
    assert_eq!(event.start, at(day, 10, 0));
    assert_eq!(event.end, at(day, 13, 0));
    assert_eq!(event.title, "Chemistry");
    assert_eq!(event.detail.timeslot, "10:00 AM - 1:00 PM");
}

#[test]
fn epoch_year_is_not_baked_in() {
    let session = dated("Math", "1 June", "9:00 AM", "12:00 PM");
    let palette = SubjectPalette::assign(["Math"]);

    let event = project_session(&session, 2026, &palette).expect("projects");
    assert_eq!(event.start.date(), NaiveDate::from_ymd_opt(2026, 6, 1).unwrap());
    assert_eq!(DEFAULT_EPOCH_YEAR, 2025);
}

#[test]
fn malformed_time_is_surfaced_per_record() {
    let store = vec![
        dated("Math", "24 May", "10:00 AM", "1:00 PM"),
        dated("Math", "24 May", "whenever", "1:00 PM"),
        dated("Math", "not a date", "10:00 AM", "1:00 PM"),
    ];
    let visible: Vec<&Session> = store.iter().collect();

    let projection = project_sessions(&store, &visible, DEFAULT_EPOCH_YEAR);

    assert_eq!(projection.events.len(), 1);
    assert_eq!(projection.issues.len(), 2);
    assert!(matches!(
        projection.issues[0].error,
        MalformedTimeError::Time { .. }
    ));
    assert!(matches!(
        projection.issues[1].error,
        MalformedTimeError::Date { .. }
    ));
}

#[test]
fn palette_is_keyed_over_the_full_store() {
    // Chemistry is filtered out, but Math keeps the color of its first-seen
    // position (second distinct subject).
    let store = vec![
        dated("Chemistry", "24 May", "10:00 AM", "1:00 PM"),
        dated("Math", "25 May", "10:00 AM", "1:00 PM"),
    ];
    let math_only: Vec<&Session> = store.iter().filter(|s| s.subject == "Math").collect();

    let filtered = project_sessions(&store, &math_only, DEFAULT_EPOCH_YEAR);
    let full: Vec<&Session> = store.iter().collect();
    let unfiltered = project_sessions(&store, &full, DEFAULT_EPOCH_YEAR);

    let math_filtered = &filtered.events[0];
    let math_unfiltered = unfiltered
        .events
        .iter()
        .find(|e| e.title == "Math")
        .expect("math present");
    assert_eq!(math_filtered.colors, math_unfiltered.colors);
}

#[test]
fn weekly_slot_lands_on_the_anchor_week() {
    let wednesday = slot(3, "17:00", "19:00");

    let event = project_slot(&wednesday).expect("projects");

    let expected_day = week_anchor() + chrono::Duration::days(3);
    assert_eq!(event.start, at(expected_day, 17, 0));
    assert_eq!(event.end, at(expected_day, 19, 0));
    assert_eq!(event.detail.when, "Wednesday");
}

#[test]
fn weekly_projection_is_render_stable() {
    let slots = vec![slot(0, "10:00", "12:00"), slot(6, "14:00", "16:00")];
    let refs: Vec<&WeeklyClassSlot> = slots.iter().collect();

    let first = project_slots(&refs);
    let second = project_slots(&refs);

    assert_eq!(first.events, second.events);
    assert_eq!(first.events[0].start.date(), week_anchor());
}

#[test]
fn out_of_range_weekday_is_an_issue() {
    let bad = slot(7, "10:00", "12:00");
    let refs = vec![&bad];

    let projection = project_slots(&refs);

    assert!(projection.events.is_empty());
    assert_eq!(
        projection.issues[0].error,
        MalformedTimeError::Weekday { day: 7 }
    );
}
