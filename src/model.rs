use chrono::{DateTime, Duration, Local, Utc};
use icalendar::{Component, Event, EventLike};
use uuid::Uuid;

/// One shift is 510 minutes (8.5 hours).
pub const SHIFT_DURATION_MIN: i64 = 510;

/// One calendar entry derived from a single (date, shift code) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftEvent {
    pub uid: String,
    /// Wall-clock creation time, emitted as both CREATED and DTSTAMP.
    pub stamp: DateTime<Utc>,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// Free-text shift code, emitted as both SUMMARY and DESCRIPTION.
    pub shift: String,
}

impl ShiftEvent {
    pub fn new(start: DateTime<Local>, shift: &str) -> Self {
        Self {
            uid: Uuid::new_v4().to_string(),
            stamp: Utc::now(),
            start,
            end: start + Duration::minutes(SHIFT_DURATION_MIN),
            shift: shift.to_string(),
        }
    }

    // --- ICAL LOGIC ---
    pub fn to_event(&self) -> Event {
        let mut event = Event::new();
        event.uid(&self.uid);
        event.timestamp(self.stamp);
        let created = self.stamp.format("%Y%m%dT%H%M%SZ").to_string();
        event.add_property("CREATED", &created);
        event.starts(self.start.with_timezone(&Utc));
        event.ends(self.end.with_timezone(&Utc));
        event.summary(&self.shift);
        event.description(&self.shift);
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 7, 0, 0).unwrap()
    }

    #[test]
    fn shift_lasts_510_minutes() {
        let ev = ShiftEvent::new(start(), "Morning");
        assert_eq!(ev.end - ev.start, Duration::minutes(510));
    }

    #[test]
    fn fresh_uid_per_event() {
        let a = ShiftEvent::new(start(), "Morning");
        let b = ShiftEvent::new(start(), "Morning");
        assert_ne!(a.uid, b.uid);
    }

    #[test]
    fn summary_and_description_carry_the_shift_code() {
        let ev = ShiftEvent::new(start(), "Late shift").to_event();
        assert_eq!(ev.get_summary(), Some("Late shift"));
        assert_eq!(ev.get_description(), Some("Late shift"));
        assert!(ev.get_uid().is_some());
    }
}
