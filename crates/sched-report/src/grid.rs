//! Week calendar grids.
//!
//! A grid is one table per calendar week: seven weekday columns, one body
//! row, events stacked inside their day's cell in start order. Dated events
//! carry the date in the column header; the weekly template grid shows day
//! names only.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use comfy_table::{Cell, Table};

use sched_core::project::CalendarEvent;

use crate::style::{apply_table_style, header_cell};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Renders dated events as one grid per calendar week (Sunday-first).
pub fn week_grids(events: &[CalendarEvent]) -> Vec<Table> {
    let mut weeks: BTreeMap<NaiveDate, [Vec<&CalendarEvent>; 7]> = BTreeMap::new();
    for event in events {
        let date = event.start.date();
        let weekday = date.weekday().num_days_from_sunday() as usize;
        let week_start = date - Duration::days(weekday as i64);
        weeks.entry(week_start).or_default()[weekday].push(event);
    }

    weeks
        .into_iter()
        .map(|(week_start, mut days)| {
            let mut table = Table::new();
            let headers: Vec<Cell> = (0..7)
                .map(|offset| {
                    let date = week_start + Duration::days(offset);
                    header_cell(&format!(
                        "{} {} {}",
                        DAY_LABELS[offset as usize],
                        date.day(),
                        date.format("%b")
                    ))
                })
                .collect();
            table.set_header(headers);
            apply_table_style(&mut table);
            table.add_row(
                days.iter_mut()
                    .map(|day| {
                        day.sort_by_key(|event| event.start);
                        day_cell(day)
                    })
                    .collect::<Vec<Cell>>(),
            );
            table
        })
        .collect()
}

/// Renders weekly-template events as a single day-name grid.
pub fn slot_grid(events: &[CalendarEvent]) -> Table {
    let mut days: [Vec<&CalendarEvent>; 7] = Default::default();
    for event in events {
        let weekday = event.start.date().weekday().num_days_from_sunday() as usize;
        days[weekday].push(event);
    }

    let mut table = Table::new();
    table.set_header(DAY_LABELS.iter().map(|label| header_cell(label)).collect::<Vec<Cell>>());
    apply_table_style(&mut table);
    table.add_row(
        days.iter_mut()
            .map(|day| {
                day.sort_by_key(|event| event.start);
                day_cell(day)
            })
            .collect::<Vec<Cell>>(),
    );
    table
}

fn day_cell(events: &[&CalendarEvent]) -> Cell {
    if events.is_empty() {
        return Cell::new("");
    }
    let lines: Vec<String> = events
        .iter()
        .map(|event| {
            format!(
                "{}\n{}\n@ {}",
                event.detail.timeslot, event.title, event.detail.centre
            )
        })
        .collect();
    Cell::new(lines.join("\n\n"))
}
