//! Facet option tables.

use comfy_table::{Cell, CellAlignment, Color, Table};

use sched_model::{Facet, FacetOption};

use crate::style::{align_column, apply_table_style, dim_cell, header_cell};

/// Renders one facet's option list with match counts and selection marks.
pub fn options_table(facet: Facet, options: &[FacetOption]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&capitalize(facet.as_str())),
        header_cell("Sessions"),
        header_cell("Selected"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    for option in options {
        let value_cell = if option.count == 0 {
            dim_cell(&option.value)
        } else {
            Cell::new(&option.value)
        };
        let count_cell = if option.count == 0 {
            dim_cell(option.count)
        } else {
            Cell::new(option.count)
        };
        let selected_cell = if option.selected {
            Cell::new("✓").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![value_cell, count_cell, selected_cell]);
    }
    table
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
