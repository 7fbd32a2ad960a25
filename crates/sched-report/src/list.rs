//! Flat list rendering.

use chrono::NaiveDate;
use comfy_table::{Cell, Table};

use sched_core::datetime::parse_day_month;
use sched_model::Session;

use crate::style::{apply_table_style, dim_cell, header_cell};

/// Renders the filtered session list as a table, optionally narrowed to one
/// calendar date.
///
/// The date filter compares against the session's normalised date under the
/// epoch year; a session whose date text cannot be parsed never matches a
/// date filter but still renders in the unfiltered list.
pub fn list_table(
    sessions: &[&Session],
    date_filter: Option<NaiveDate>,
    epoch_year: i32,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Subject"),
        header_cell("Topic"),
        header_cell("Level"),
        header_cell("Centre"),
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Tutor"),
    ]);
    apply_table_style(&mut table);

    for session in sessions {
        if let Some(wanted) = date_filter {
            let normalised = parse_day_month(&session.date, epoch_year).ok();
            if normalised != Some(wanted) {
                continue;
            }
        }
        table.add_row(vec![
            Cell::new(&session.subject),
            optional_cell(session.topic.as_deref()),
            Cell::new(&session.level),
            Cell::new(&session.centre),
            Cell::new(&session.date),
            Cell::new(format!("{} - {}", session.start_time, session.end_time)),
            Cell::new(&session.tutor),
        ]);
    }
    table
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}
