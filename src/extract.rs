// File: src/extract.rs
//! Walks the matched (date, shift) column pairs and produces the events.

use crate::dates;
use crate::error::Result;
use crate::grid::Row;
use crate::model::ShiftEvent;

/// Columns 0 and 1 are label columns in the supported layout; data starts
/// in the third column.
const FIRST_DATA_COLUMN: usize = 2;

/// Produces one [`ShiftEvent`] per column where both the date cell and the
/// shift cell are non-empty, in ascending column order.
///
/// An unreadable cell or an unparsable date aborts the whole run; an empty
/// cell on either side merely skips the column.
pub fn extract(
    date_row: &Row,
    employee_row: &Row,
    reference_year: i32,
) -> Result<Vec<ShiftEvent>> {
    let mut events = Vec::new();

    for col in FIRST_DATA_COLUMN..date_row.len() {
        let date_text = date_row.formatted(col)?;
        let shift_text = employee_row.formatted(col)?;
        if date_text.is_empty() || shift_text.is_empty() {
            continue;
        }

        let start = dates::parse_day_month(date_text, reference_year)?;
        log::debug!("column {}: {} on {}", col, shift_text, start.date_naive());
        events.push(ShiftEvent::new(start, shift_text));
    }

    Ok(events)
}
