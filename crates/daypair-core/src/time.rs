//! Time types for calendar events.
//!
//! This module provides [`EventTime`] for representing event start/end times
//! (which may be either a specific instant or an all-day date), and
//! [`DayBounds`] for the fetch window of a single displayed day.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Represents the time of a calendar event.
///
/// Calendar events come in two shapes:
/// - **DateTime**: a specific point in time (stored as UTC)
/// - **AllDay**: a date without a time-of-day component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    /// A specific instant, stored in UTC.
    DateTime(DateTime<Utc>),
    /// An all-day event date (no time-of-day).
    AllDay(NaiveDate),
}

impl EventTime {
    /// Creates an `EventTime::DateTime` from a UTC instant.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates an `EventTime::DateTime` from an instant in any timezone.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self::DateTime(dt.with_timezone(&Utc))
    }

    /// Creates an `EventTime::AllDay` from a date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    /// Returns `true` if this is an all-day event time.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Returns the instant if this is a `DateTime` variant.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::AllDay(_) => None,
        }
    }

    /// Returns the date if this is an `AllDay` variant.
    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Self::AllDay(d) => Some(d),
            Self::DateTime(_) => None,
        }
    }

    /// Returns the local wall-clock time-of-day, or `None` for all-day times.
    ///
    /// This is the only value the slot grid reads from an event time: grid
    /// occupancy is decided purely by local hour-of-day, never by the
    /// event's own date.
    pub fn local_clock_time(&self) -> Option<NaiveTime> {
        match self {
            Self::DateTime(dt) => Some(dt.with_timezone(&Local).time()),
            Self::AllDay(_) => None,
        }
    }
}

/// The fetch window for a single displayed day.
///
/// Covers the local day from midnight to 23:59:59.999, expressed in UTC for
/// the calendar API's `timeMin`/`timeMax` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBounds {
    /// Start of the day (local midnight, inclusive).
    pub time_min: DateTime<Utc>,
    /// End of the day (local 23:59:59.999, inclusive).
    pub time_max: DateTime<Utc>,
}

impl DayBounds {
    /// Builds the bounds of `date` in the given timezone.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        let time_min = tz
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"))
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc);
        let time_max = tz
            .from_local_datetime(&date.and_hms_milli_opt(23, 59, 59, 999).expect("valid time"))
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc);
        Self { time_min, time_max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn datetime_creation() {
        let dt = utc(2025, 3, 12, 10, 30, 0);
        let et = EventTime::from_utc(dt);
        assert!(!et.is_all_day());
        assert_eq!(et.as_datetime(), Some(&dt));
        assert_eq!(et.as_date(), None);
    }

    #[test]
    fn allday_creation() {
        let d = date(2025, 3, 12);
        let et = EventTime::from_date(d);
        assert!(et.is_all_day());
        assert_eq!(et.as_date(), Some(&d));
        assert_eq!(et.as_datetime(), None);
    }

    #[test]
    fn local_clock_time_roundtrip() {
        // A wall-clock time constructed in the local zone survives the UTC
        // storage round trip.
        let local = Local.with_ymd_and_hms(2025, 3, 12, 14, 45, 0).unwrap();
        let et = EventTime::from_local(local);
        assert_eq!(
            et.local_clock_time(),
            Some(NaiveTime::from_hms_opt(14, 45, 0).unwrap())
        );
    }

    #[test]
    fn allday_has_no_clock_time() {
        let et = EventTime::from_date(date(2025, 3, 12));
        assert_eq!(et.local_clock_time(), None);
    }

    #[test]
    fn day_bounds_utc() {
        let bounds = DayBounds::for_date(date(2025, 3, 12), &Utc);
        assert_eq!(bounds.time_min, utc(2025, 3, 12, 0, 0, 0));
        assert_eq!(
            bounds.time_max,
            Utc.with_ymd_and_hms(2025, 3, 12, 23, 59, 59).unwrap()
                + chrono::Duration::milliseconds(999)
        );
    }

    #[test]
    fn day_bounds_cover_the_whole_day() {
        let bounds = DayBounds::for_date(date(2025, 3, 12), &Utc);
        assert!(bounds.time_min < bounds.time_max);
        assert_eq!(
            bounds.time_max - bounds.time_min,
            chrono::Duration::hours(24) - chrono::Duration::milliseconds(1)
        );
    }

    #[test]
    fn serde_roundtrip() {
        let et = EventTime::from_utc(utc(2025, 3, 12, 10, 30, 0));
        let json = serde_json::to_string(&et).unwrap();
        let parsed: EventTime = serde_json::from_str(&json).unwrap();
        assert_eq!(et, parsed);
    }
}
