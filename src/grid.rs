// File: src/grid.rs
//! Read-only grid view of the workbook, and the row-locating scan that
//! finds the date header row and the employee's row.

use crate::error::{Result, ScheduleError};

/// First cell of the row that carries the column dates.
pub const DATE_ROW_SENTINEL: &str = "date:";

/// A single rendered cell. Excel error values (`#DIV/0!`, `#REF!`, ...)
/// are carried as `Error` so the failure surfaces where the cell is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Empty,
    Text(String),
    Error(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

#[derive(Debug, Clone)]
pub struct Row {
    /// 0-based row index within its sheet, for diagnostics.
    pub index: usize,
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(index: usize, cells: Vec<CellValue>) -> Self {
        Self { index, cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Formatted text of one cell. Missing and empty cells render as "";
    /// an error cell is fatal, reported with its coordinates.
    pub fn formatted(&self, col: usize) -> Result<&str> {
        match self.cells.get(col) {
            None | Some(CellValue::Empty) => Ok(""),
            Some(CellValue::Text(text)) => Ok(text),
            Some(CellValue::Error(message)) => Err(ScheduleError::CellFormat {
                row: self.index,
                col,
                message: message.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

/// The whole workbook, rendered to text. Built once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub sheets: Vec<Sheet>,
}

impl Grid {
    /// Scans every row of every sheet once and returns the date header row
    /// and the employee's row.
    ///
    /// Both matches are case-insensitive on the first cell, and when several
    /// rows match, the last one wins. The sentinel check runs first, so a
    /// row starting with "date:" can never be picked as an employee row.
    pub fn locate(&self, employee_name: &str) -> Result<(&Row, &Row)> {
        let needle = employee_name.to_lowercase();
        let mut date_row: Option<&Row> = None;
        let mut employee_row: Option<&Row> = None;

        for sheet in &self.sheets {
            log::debug!("scanning sheet \"{}\" ({} rows)", sheet.name, sheet.rows.len());
            for row in &sheet.rows {
                let first = row.formatted(0)?.to_lowercase();
                if first == DATE_ROW_SENTINEL {
                    date_row = Some(row);
                } else if first == needle {
                    employee_row = Some(row);
                }
            }
        }

        let date_row = date_row.ok_or(ScheduleError::MissingDateRow)?;
        let employee_row = employee_row
            .ok_or_else(|| ScheduleError::MissingEmployeeRow(employee_name.to_string()))?;

        if date_row.len() != employee_row.len() {
            return Err(ScheduleError::RowLengthMismatch {
                dates: date_row.len(),
                shifts: employee_row.len(),
            });
        }

        Ok((date_row, employee_row))
    }
}
