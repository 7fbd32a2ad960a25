//! Roster CSV conversion.
//!
//! The scheduling roster is exported as a CSV with display-oriented columns;
//! this module maps it onto `Session` records for the feed. Along the way it
//! strips the parenthesised weekday from the date text, normalises the start
//! time, derives the end time with the fixed three-hour block, and attaches
//! the per-subject registration entry id.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use sched_core::datetime::add_three_hours;
use sched_model::Session;

use crate::error::FetchError;

/// Registration form entry ids, one per JC subject.
///
/// This table is fixed in the ingestion step by design: the form owns the
/// ids and the roster only names subjects.
const PREFILL_FIELDS: [(&str, &str); 6] = [
    ("Math", "822255076"),
    ("Econs", "1016736042"),
    ("Biology", "1188715475"),
    ("Chemistry", "1143667470"),
    ("Physics", "299425437"),
    ("GP", "136322790"),
];

/// The stream every roster row belongs to (the roster is a JC export).
const ROSTER_STREAM: &str = "JC";

/// Looks up the registration entry id for a subject.
pub fn prefill_field_for(subject: &str) -> Option<&'static str> {
    PREFILL_FIELDS
        .iter()
        .find(|(name, _)| *name == subject)
        .map(|(_, id)| *id)
}

/// Converts a roster CSV into session records.
///
/// A row with an unparseable start time is dropped with a warning rather
/// than aborting the whole conversion.
pub fn convert_roster(path: &Path) -> Result<Vec<Session>, FetchError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|error| FetchError::Roster {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let headers = reader
        .headers()
        .map_err(|error| FetchError::Roster {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?
        .clone();
    let column = |name: &str| headers.iter().position(|header| header == name);

    let subject_col = column("Subject").ok_or_else(|| missing_column(path, "Subject"))?;
    let start_col = column("Start Time").ok_or_else(|| missing_column(path, "Start Time"))?;
    let date_col = column("Date (text)").ok_or_else(|| missing_column(path, "Date (text)"))?;
    let level_col = column("Level");
    let topic_col = column("Topic");
    let tutor_col = column("Tutor");
    let centre_col = column("Centre");
    let classroom_col = column("Classroom");
    let prefill_col = column("Form Option to Display");

    let mut sessions = Vec::new();
    for (row_index, record) in reader.records().enumerate() {
        let record = record.map_err(|error| FetchError::Roster {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;
        let field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };

        let subject = field(Some(subject_col));
        let start_time = normalize_start_time(&field(Some(start_col)));
        let end_time = match add_three_hours(&start_time) {
            Ok(end) => end,
            Err(error) => {
                warn!(row = row_index + 2, %error, "skipping roster row");
                continue;
            }
        };

        let topic = non_empty(field(topic_col));
        let classroom = non_empty(field(classroom_col));
        let prefill = non_empty(field(prefill_col));
        let prefill_field = prefill_field_for(&subject).map(str::to_string);

        sessions.push(Session {
            subject,
            topic,
            level: field(level_col),
            stream: ROSTER_STREAM.to_string(),
            tutor: field(tutor_col),
            centre: field(centre_col),
            classroom,
            date: strip_weekday(&field(Some(date_col))),
            start_time,
            end_time,
            prefill,
            prefill_field,
        });
    }
    Ok(sessions)
}

fn missing_column(path: &Path, name: &str) -> FetchError {
    FetchError::Roster {
        path: path.to_path_buf(),
        message: format!("missing column {name:?}"),
    }
}

/// Drops a trailing parenthesised weekday: `"24 May (Sat)"` -> `"24 May"`.
fn strip_weekday(date: &str) -> String {
    match date.find('(') {
        Some(open) => date[..open].trim_end().to_string(),
        None => date.trim().to_string(),
    }
}

/// Collapses a seconds component out of the roster's time display:
/// `"10:00:00 AM"` -> `"10:00 AM"`.
fn normalize_start_time(time: &str) -> String {
    let trimmed = time.trim();
    let Some((clock, meridiem)) = trimmed.rsplit_once(' ') else {
        return trimmed.to_string();
    };
    let clock = match clock.match_indices(':').nth(1) {
        Some((second_colon, _)) => &clock[..second_colon],
        None => clock,
    };
    format!("{clock} {meridiem}")
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
