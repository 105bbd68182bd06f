//! EventSource trait definition.
//!
//! [`EventSource`] is the abstraction the day view consumes: something that
//! can list calendars and return one day's events for a calendar. The only
//! shipped implementation is Google Calendar, but the view and its tests
//! depend on this trait, not on the HTTP client.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use daypair_core::CalendarEvent;

use crate::error::SourceResult;

/// A boxed future for object-safe async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Information about a calendar, as shown in the calendar picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarInfo {
    /// Unique identifier for the calendar.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether this is the account's primary calendar.
    pub is_primary: bool,
    /// Background color for display, as the API reports it.
    pub background_color: Option<String>,
}

impl CalendarInfo {
    /// Creates a new CalendarInfo with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_primary: false,
            background_color: None,
        }
    }

    /// Builder method to mark as primary.
    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    /// Builder method to set the background color.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }
}

/// A source of calendar data.
///
/// Implementations handle authentication, transport and pagination; the
/// returned events are already normalized, filtered to the requested day
/// and free of cancelled entries. Implementations must be `Send + Sync`:
/// the client fetches two calendars concurrently from one shared source.
pub trait EventSource: Send + Sync {
    /// A short name for this source (e.g. "google").
    fn name(&self) -> &str;

    /// Returns true if the source is authorized and ready to serve requests.
    fn is_ready(&self) -> bool;

    /// Lists the calendars available to the user.
    fn list_calendars(&self) -> BoxFuture<'_, SourceResult<Vec<CalendarInfo>>>;

    /// Returns the events of `calendar_id` occurring on `date`, in the
    /// source's start-time order.
    fn events_on<'a>(
        &'a self,
        calendar_id: &'a str,
        date: NaiveDate,
    ) -> BoxFuture<'a, SourceResult<Vec<CalendarEvent>>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_info_builder() {
        let info = CalendarInfo::new("work@example.com", "Work")
            .with_primary(true)
            .with_background_color("#9fe1e7");

        assert_eq!(info.id, "work@example.com");
        assert_eq!(info.name, "Work");
        assert!(info.is_primary);
        assert_eq!(info.background_color.as_deref(), Some("#9fe1e7"));
    }

    #[test]
    fn defaults_are_not_primary() {
        let info = CalendarInfo::new("cal", "Cal");
        assert!(!info.is_primary);
        assert!(info.background_color.is_none());
    }
}
