// File: src/workbook.rs
//! Loads an .xlsx workbook into the [`Grid`] abstraction via calamine.

use crate::error::{Result, ScheduleError};
use crate::grid::{CellValue, Grid, Row, Sheet};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// Opens the workbook at `path` and renders every sheet to text cells.
pub fn open_grid(path: &Path) -> Result<Grid> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|source| ScheduleError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let mut sheets = Vec::new();
    for (name, range) in workbook.worksheets() {
        // calamine ranges start at the first used cell; pad back to
        // absolute coordinates so column indices match the sheet layout.
        let (row_offset, col_offset) = range
            .start()
            .map_or((0, 0), |(r, c)| (r as usize, c as usize));

        let mut rows = Vec::with_capacity(range.height());
        for (i, cells) in range.rows().enumerate() {
            let mut rendered = vec![CellValue::Empty; col_offset];
            rendered.extend(cells.iter().map(render_cell));
            rows.push(Row::new(row_offset + i, rendered));
        }

        log::debug!("loaded sheet \"{}\" with {} rows", name, rows.len());
        sheets.push(Sheet { name, rows });
    }

    Ok(Grid { sheets })
}

/// Renders one cell the way it would display. Error values are preserved
/// as unreadable cells rather than silently dropped.
fn render_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Text(i.to_string()),
        Data::Float(f) => CellValue::Text(f.to_string()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::DateTime(dt) => CellValue::Text(
            dt.as_datetime()
                .map_or_else(|| dt.as_f64().to_string(), |d| d.to_string()),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
