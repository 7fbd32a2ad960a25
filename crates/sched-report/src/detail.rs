//! Session detail card (the modal equivalent).

use comfy_table::{Cell, Table};

use sched_core::project::EventDetail;

use crate::links::event_registration_link;
use crate::style::{apply_table_style, dim_cell, header_cell};

/// Renders the detail card for one projected event: subject, topic, level,
/// date or day, timeslot, venue, and the registration link when the record
/// carries prefill data.
pub fn detail_card(detail: &EventDetail) -> Table {
    let mut table = Table::new();
    let mut title = detail.subject.clone();
    if let Some(topic) = &detail.topic {
        title.push_str(&format!(" - {topic}"));
    }
    if !detail.level.is_empty() {
        title.push_str(&format!(" - {}", detail.level));
    }
    table.set_header(vec![header_cell(&title), header_cell("")]);
    apply_table_style(&mut table);

    table.add_row(vec![Cell::new("When"), Cell::new(&detail.when)]);
    table.add_row(vec![Cell::new("Timeslot"), Cell::new(&detail.timeslot)]);
    table.add_row(vec![Cell::new("Venue"), Cell::new(&detail.centre)]);
    table.add_row(vec![Cell::new("Tutor"), Cell::new(&detail.tutor)]);
    match event_registration_link(detail) {
        Some(link) => table.add_row(vec![Cell::new("Register (prefilled)"), Cell::new(link)]),
        None => table.add_row(vec![Cell::new("Register"), dim_cell("no prefill available")]),
    };
    table
}
