//! Raw event payloads as the Google Calendar API returns them.
//!
//! Timestamps are kept as the API's strings here; parsing and validation
//! happen once, in [`crate::normalize`]. A [`RawEvent`] deserializes
//! directly from an `events.list` item.

use serde::{Deserialize, Serialize};

/// The start or end of a raw event: an RFC 3339 `dateTime`, or a `date`
/// for all-day events. Cancelled events may carry neither.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTime {
    /// All-day date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Timed instant, RFC 3339.
    pub date_time: Option<String>,
}

impl RawTime {
    /// A timed value.
    pub fn timed(date_time: impl Into<String>) -> Self {
        Self {
            date: None,
            date_time: Some(date_time.into()),
        }
    }

    /// An all-day value.
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            date_time: None,
        }
    }

    /// All-day is the absence of a `dateTime` component.
    pub fn is_all_day(&self) -> bool {
        self.date_time.is_none()
    }
}

/// A single event from the `events.list` response, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawEvent {
    /// Unique identifier within the calendar.
    pub id: Option<String>,
    /// The event title, absent for untitled events.
    pub summary: Option<String>,
    /// When the event starts.
    pub start: RawTime,
    /// When the event ends.
    pub end: RawTime,
    /// Event status ("confirmed", "tentative", "cancelled").
    pub status: Option<String>,
}

impl RawEvent {
    /// The display title, with a placeholder for untitled events.
    pub fn effective_title(&self) -> &str {
        self.summary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("(No title)")
    }

    /// Returns true if the event is cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("cancelled"))
    }

    /// Returns true if this is an all-day event.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day()
    }
}
