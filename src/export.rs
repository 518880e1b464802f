// File: src/export.rs
//! Assembles the iCalendar document and writes the .ics file.

use crate::error::{Result, ScheduleError};
use crate::model::ShiftEvent;
use icalendar::{Calendar, Property};
use std::fs;
use std::path::Path;

/// Output lands next to the process, named after the employee.
pub fn output_file_name(employee_name: &str) -> String {
    format!("{employee_name} schedule.ics")
}

/// Builds the VCALENDAR holding one VEVENT per shift.
pub fn build_calendar(events: &[ShiftEvent]) -> Calendar {
    let mut calendar = Calendar::new();
    calendar.append_property(Property::new("METHOD", "PUBLISH"));
    for event in events {
        calendar.push(event.to_event());
    }
    calendar
}

/// Serializes the calendar to `path` in a single write.
pub fn write_calendar(calendar: &Calendar, path: &Path) -> Result<()> {
    fs::write(path, calendar.to_string()).map_err(|source| ScheduleError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn events() -> Vec<ShiftEvent> {
        let start = Local.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap();
        vec![
            ShiftEvent::new(start, "Morning"),
            ShiftEvent::new(start + chrono::Duration::days(1), "Late"),
        ]
    }

    #[test]
    fn calendar_is_published_with_one_vevent_per_shift() {
        let ics = build_calendar(&events()).to_string();
        assert!(ics.contains("METHOD:PUBLISH"));
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 2);
        assert!(ics.contains("SUMMARY:Morning"));
        assert!(ics.contains("DESCRIPTION:Morning"));
        assert!(ics.contains("SUMMARY:Late"));
    }

    #[test]
    fn empty_schedule_still_serializes() {
        let ics = build_calendar(&[]).to_string();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn output_file_is_named_after_the_employee() {
        assert_eq!(output_file_name("Jane Doe"), "Jane Doe schedule.ics");
    }
}
