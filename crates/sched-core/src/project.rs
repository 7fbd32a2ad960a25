//! Projection of schedule records into calendar-displayable events.
//!
//! Events are created fresh on every recomputation of the filtered list and
//! never mutated. A record whose date or time fields cannot be parsed is
//! reported as a per-record issue rather than silently placed at an invalid
//! instant.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use sched_model::{Session, WeeklyClassSlot};

use crate::color::{EventColors, SubjectPalette, hash_color};
use crate::datetime::{
    MalformedTimeError, parse_clock_12h, parse_clock_24h, parse_day_month,
};

/// Assumed year for dated sessions whose feed omits one.
pub const DEFAULT_EPOCH_YEAR: i32 = 2025;

/// Display fields carried along for the detail card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetail {
    pub subject: String,
    pub topic: Option<String>,
    pub level: String,
    pub tutor: String,
    pub centre: String,
    /// The record's own date or day wording (`"24 May"`, `"Wednesday"`).
    pub when: String,
    pub timeslot: String,
    pub prefill: Option<String>,
    pub prefill_field: Option<String>,
    pub prefill_link: Option<String>,
}

/// One calendar-displayable event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub colors: EventColors,
    pub detail: EventDetail,
}

/// A record that failed projection, identified by its position in the
/// projected list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionIssue {
    pub index: usize,
    pub error: MalformedTimeError,
}

/// Result of projecting a record list: placeable events plus the per-record
/// failures.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    pub events: Vec<CalendarEvent>,
    pub issues: Vec<ProjectionIssue>,
}

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Fixed reference Sunday used to place weekly slots.
///
/// A fixed anchor keeps slot dates identical across renders, unlike a
/// "next occurrence from today" strategy which shifts daily.
pub fn week_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 7).expect("valid anchor date")
}

/// Projects one dated session against the epoch year.
pub fn project_session(
    session: &Session,
    epoch_year: i32,
    palette: &SubjectPalette,
) -> Result<CalendarEvent, MalformedTimeError> {
    let date = parse_day_month(&session.date, epoch_year)?;
    let start = date.and_time(parse_clock_12h(&session.start_time)?);
    let end = date.and_time(parse_clock_12h(&session.end_time)?);
    Ok(CalendarEvent {
        title: session.subject.clone(),
        start,
        end,
        colors: palette.colors_for(&session.subject),
        detail: EventDetail {
            subject: session.subject.clone(),
            topic: session.topic.clone(),
            level: session.level.clone(),
            tutor: session.tutor.clone(),
            centre: session.centre.clone(),
            when: session.date.clone(),
            timeslot: format!("{} - {}", session.start_time, session.end_time),
            prefill: session.prefill.clone(),
            prefill_field: session.prefill_field.clone(),
            prefill_link: None,
        },
    })
}

/// Projects a filtered session list.
///
/// `store` is the full session store; the palette is keyed by first-seen
/// subject order over the whole store so colors survive filter changes.
/// `visible` is the filtered view (see `facets::calendar_filtered`).
pub fn project_sessions(
    store: &[Session],
    visible: &[&Session],
    epoch_year: i32,
) -> Projection {
    let palette = SubjectPalette::assign(store.iter().map(|s| s.subject.as_str()));
    let mut projection = Projection::default();
    for (index, session) in visible.iter().enumerate() {
        match project_session(session, epoch_year, &palette) {
            Ok(event) => projection.events.push(event),
            Err(error) => projection.issues.push(ProjectionIssue { index, error }),
        }
    }
    projection
}

/// Projects one weekly slot onto the fixed reference week.
pub fn project_slot(slot: &WeeklyClassSlot) -> Result<CalendarEvent, MalformedTimeError> {
    if slot.day > 6 {
        return Err(MalformedTimeError::Weekday { day: slot.day });
    }
    let date = week_anchor() + Duration::days(i64::from(slot.day));
    let start = date.and_time(parse_clock_24h(&slot.start_time)?);
    let end = date.and_time(parse_clock_24h(&slot.end_time)?);
    Ok(CalendarEvent {
        title: slot.title.clone(),
        start,
        end,
        colors: hash_color(&slot.subject),
        detail: EventDetail {
            subject: slot.subject.clone(),
            topic: None,
            level: slot.level.clone(),
            tutor: slot.tutor.clone(),
            centre: slot.centre.clone(),
            when: DAY_NAMES[usize::from(slot.day)].to_string(),
            timeslot: format!("{} - {}", slot.start_time, slot.end_time),
            prefill: None,
            prefill_field: None,
            prefill_link: if slot.prefill_link.is_empty() {
                None
            } else {
                Some(slot.prefill_link.clone())
            },
        },
    })
}

/// Projects a weekly slot list.
pub fn project_slots(visible: &[&WeeklyClassSlot]) -> Projection {
    let mut projection = Projection::default();
    for (index, slot) in visible.iter().enumerate() {
        match project_slot(slot) {
            Ok(event) => projection.events.push(event),
            Err(error) => projection.issues.push(ProjectionIssue { index, error }),
        }
    }
    projection
}
