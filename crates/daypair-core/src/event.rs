//! The calendar event type consumed by the slot grid.

use serde::{Deserialize, Serialize};

use crate::time::EventTime;

/// A calendar event, normalized from whatever the data source returned.
///
/// Events are immutable once built: the grid clones them into slots and
/// never writes back. The title is already display-ready (the source
/// substitutes a placeholder for untitled events).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Unique identifier within the source.
    pub id: String,
    /// Display title.
    pub title: String,
    /// When the event starts.
    pub start: EventTime,
    /// When the event ends.
    pub end: EventTime,
    /// The calendar this event belongs to.
    pub calendar_id: String,
}

impl CalendarEvent {
    /// Creates a new calendar event.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: EventTime,
        end: EventTime,
        calendar_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            calendar_id: calendar_id.into(),
        }
    }

    /// Returns `true` if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn timed_event() {
        let event = CalendarEvent::new(
            "evt-1",
            "Standup",
            EventTime::from_utc(Utc.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap()),
            EventTime::from_utc(Utc.with_ymd_and_hms(2025, 3, 12, 9, 30, 0).unwrap()),
            "primary",
        );
        assert_eq!(event.id, "evt-1");
        assert_eq!(event.title, "Standup");
        assert_eq!(event.calendar_id, "primary");
        assert!(!event.is_all_day());
    }

    #[test]
    fn all_day_event() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let event = CalendarEvent::new(
            "evt-2",
            "Conference",
            EventTime::from_date(d),
            EventTime::from_date(d.succ_opt().unwrap()),
            "primary",
        );
        assert!(event.is_all_day());
    }
}
