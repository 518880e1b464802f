// File: src/error.rs
//! Failure taxonomy for the conversion pipeline. Every variant is fatal:
//! this is a one-shot tool with exactly one severity.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScheduleError>;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Input workbook missing or unreadable.
    #[error("failed to open workbook {path}: {source}")]
    WorkbookOpen {
        path: PathBuf,
        source: calamine::XlsxError,
    },

    /// A cell's renderable text could not be computed (Excel error value).
    #[error("unreadable cell at row {row}, column {col}: {message}")]
    CellFormat {
        row: usize,
        col: usize,
        message: String,
    },

    #[error("could not find a row with the dates (first cell \"date:\")")]
    MissingDateRow,

    #[error("could not find a row for employee \"{0}\"")]
    MissingEmployeeRow(String),

    #[error("date row has {dates} columns but employee row has {shifts}")]
    RowLengthMismatch { dates: usize, shifts: usize },

    #[error("could not understand the date \"{0}\"")]
    MalformedDate(String),

    #[error("unknown month in date \"{0}\"")]
    UnknownMonth(String),

    /// Destination .ics file could not be created or written.
    #[error("failed to write calendar file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
