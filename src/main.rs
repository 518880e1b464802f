use anyhow::Result;
use chrono::{Datelike, Local};
use shiftcal::{cli, export, extract, workbook};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = cli::parse(&args)?;
    if opts.show_help {
        cli::print_help();
        return Ok(());
    }

    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    log::info!(
        "converting schedule for {} from {}",
        opts.employee_name,
        opts.file_path.display()
    );

    let grid = workbook::open_grid(&opts.file_path)?;
    let (date_row, employee_row) = grid.locate(&opts.employee_name)?;
    let events = extract::extract(date_row, employee_row, Local::now().year())?;
    if events.is_empty() {
        log::warn!("no scheduled shifts found for {}", opts.employee_name);
    } else {
        log::info!("extracted {} shift(s)", events.len());
    }

    let calendar = export::build_calendar(&events);
    let output = PathBuf::from(export::output_file_name(&opts.employee_name));
    export::write_calendar(&calendar, &output)?;

    println!(
        "Employee schedule converted to \"{}\" successfully!",
        output.display()
    );
    Ok(())
}
