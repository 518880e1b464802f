// Crate root library declaration and module exports.
pub mod cli;
pub mod dates;
pub mod error;
pub mod export;
pub mod extract;
pub mod grid;
pub mod model;
pub mod workbook;

pub use error::{Result, ScheduleError};
