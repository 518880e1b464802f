// File: ./src/cli.rs
//! Shared command-line interface logic: flag parsing and help.

use anyhow::{Result, bail};
use std::path::PathBuf;

pub const DEFAULT_EMPLOYEE_NAME: &str = "Jane Doe";

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub employee_name: String,
    pub file_path: PathBuf,
    pub show_help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            employee_name: DEFAULT_EMPLOYEE_NAME.to_string(),
            file_path: PathBuf::from("."),
            show_help: false,
        }
    }
}

/// Parses the program arguments (without the binary name). Unknown flags
/// and flags missing their value are fatal.
pub fn parse(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => parsed.show_help = true,
            "-n" | "--name" => {
                i += 1;
                match args.get(i) {
                    Some(value) => parsed.employee_name = value.clone(),
                    None => bail!("--name requires a value"),
                }
            }
            "-f" | "--file-path" => {
                i += 1;
                match args.get(i) {
                    Some(value) => parsed.file_path = PathBuf::from(value),
                    None => bail!("--file-path requires a value"),
                }
            }
            other => bail!("unknown argument '{}' (see --help)", other),
        }
        i += 1;
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "shiftcal v{} - Convert a work-schedule spreadsheet into an .ics calendar",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    shiftcal --file-path <schedule.xlsx> [--name <employee>]");
    println!("    shiftcal --help");
    println!();
    println!("OPTIONS:");
    println!("    -n, --name <employee>     Employee row to convert (default: \"Jane Doe\").");
    println!("    -f, --file-path <path>    Path to the .xlsx schedule file.");
    println!("    -h, --help                Show this help message.");
    println!();
    println!("OUTPUT:");
    println!("    Writes \"<employee> schedule.ics\" into the working directory, one");
    println!("    event per scheduled shift (07:00 local start, 8.5 hour duration).");
    println!();
    println!("SCHEDULE LAYOUT:");
    println!("    The workbook must contain a row whose first cell is \"date:\" holding");
    println!("    day-month tokens like \"15-Sept\" from the third column on, and one row");
    println!("    per employee with the shift codes aligned to those columns.");
}
