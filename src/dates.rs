// File: src/dates.rs
//! Parsing of the schedule's "day-month" date notation (e.g. "15-Sept").

use crate::error::{Result, ScheduleError};
use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Shifts start at 07:00 local time.
pub const SHIFT_START_HOUR: u32 = 7;

/// Resolves a month abbreviation as it appears in the schedule header.
/// The notation is fixed and case-sensitive; note "Sept", not "Sep".
fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev {
        "Jan" => 1,
        "Feb" => 2,
        "Mar" => 3,
        "Apr" => 4,
        "May" => 5,
        "Jun" => 6,
        "Jul" => 7,
        "Aug" => 8,
        "Sept" => 9,
        "Oct" => 10,
        "Nov" => 11,
        "Dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parses a `"<day>-<month-abbrev>"` token into the shift start instant:
/// 07:00 local time on that day in `reference_year`.
///
/// The schedule omits the year, so the caller supplies one (normally the
/// current year — schedules spanning new year are not representable).
pub fn parse_day_month(token: &str, reference_year: i32) -> Result<DateTime<Local>> {
    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() != 2 {
        return Err(ScheduleError::MalformedDate(token.to_string()));
    }

    let day: u32 = parts[0]
        .parse()
        .map_err(|_| ScheduleError::MalformedDate(token.to_string()))?;
    let month = month_number(parts[1])
        .ok_or_else(|| ScheduleError::UnknownMonth(token.to_string()))?;

    // Rejects day/month combinations that do not exist (e.g. "31-Feb").
    let date = NaiveDate::from_ymd_opt(reference_year, month, day)
        .ok_or_else(|| ScheduleError::MalformedDate(token.to_string()))?;
    let start = date.and_hms_opt(SHIFT_START_HOUR, 0, 0).unwrap();

    // 07:00 can fall inside a DST gap in some timezones; treat that like
    // any other unrepresentable date.
    Local
        .from_local_datetime(&start)
        .earliest()
        .ok_or_else(|| ScheduleError::MalformedDate(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_day_and_month_at_shift_start() {
        let dt = parse_day_month("15-Sept", 2026).unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.month(), 9);
        assert_eq!(dt.day(), 15);
        assert_eq!(dt.hour(), 7);
        assert_eq!(dt.minute(), 0);
        assert_eq!(dt.second(), 0);
    }

    #[test]
    fn parsing_is_deterministic() {
        let a = parse_day_month("15-Sept", 2026).unwrap();
        let b = parse_day_month("15-Sept", 2026).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_unknown_month() {
        assert!(matches!(
            parse_day_month("15-Smarch", 2026),
            Err(ScheduleError::UnknownMonth(_))
        ));
    }

    #[test]
    fn month_match_is_case_sensitive() {
        assert!(matches!(
            parse_day_month("15-sept", 2026),
            Err(ScheduleError::UnknownMonth(_))
        ));
        // "Sep" is not in the notation either, only "Sept".
        assert!(matches!(
            parse_day_month("15-Sep", 2026),
            Err(ScheduleError::UnknownMonth(_))
        ));
    }

    #[test]
    fn rejects_wrong_separator_count() {
        assert!(matches!(
            parse_day_month("15Sept", 2026),
            Err(ScheduleError::MalformedDate(_))
        ));
        assert!(matches!(
            parse_day_month("1-2-3", 2026),
            Err(ScheduleError::MalformedDate(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_day() {
        assert!(matches!(
            parse_day_month("foo-Sept", 2026),
            Err(ScheduleError::MalformedDate(_))
        ));
        assert!(matches!(
            parse_day_month("-Sept", 2026),
            Err(ScheduleError::MalformedDate(_))
        ));
    }

    #[test]
    fn rejects_nonexistent_date() {
        assert!(matches!(
            parse_day_month("31-Feb", 2026),
            Err(ScheduleError::MalformedDate(_))
        ));
    }
}
