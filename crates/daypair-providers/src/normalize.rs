//! RawEvent to CalendarEvent conversion.
//!
//! This is the ingestion boundary: timestamp strings are parsed exactly
//! once, here. An event whose payload cannot be parsed is rejected with
//! [`SourceErrorCode::MalformedEvent`] instead of silently never matching
//! any slot downstream.
//!
//! [`SourceErrorCode::MalformedEvent`]: crate::error::SourceErrorCode::MalformedEvent

use chrono::{DateTime, NaiveDate, Utc};
use daypair_core::{CalendarEvent, EventTime};

use crate::error::{SourceError, SourceResult};
use crate::raw_event::{RawEvent, RawTime};

/// Converts a [`RawEvent`] into a [`CalendarEvent`].
///
/// The title falls back to `"(No title)"`; `calendar_id` is attached by the
/// caller since the API response does not repeat it per event.
///
/// # Errors
///
/// Returns a malformed-event error when the payload has no id, a timestamp
/// fails to parse, or a time carries neither `date` nor `dateTime`.
pub fn normalize_event(raw: &RawEvent, calendar_id: &str) -> SourceResult<CalendarEvent> {
    let id = raw
        .id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| SourceError::malformed_event("event has no id"))?;

    let start = parse_time(&raw.start)
        .map_err(|e| SourceError::malformed_event(format!("event {id}: bad start: {e}")))?;
    let end = parse_time(&raw.end)
        .map_err(|e| SourceError::malformed_event(format!("event {id}: bad end: {e}")))?;

    Ok(CalendarEvent::new(
        id,
        raw.effective_title(),
        start,
        end,
        calendar_id,
    ))
}

/// Parses one raw time. `dateTime` wins when both fields are present.
fn parse_time(raw: &RawTime) -> Result<EventTime, String> {
    if let Some(ref dt) = raw.date_time {
        let parsed = DateTime::parse_from_rfc3339(dt)
            .map_err(|e| format!("unparsable dateTime {dt:?}: {e}"))?;
        return Ok(EventTime::from_utc(parsed.with_timezone(&Utc)));
    }

    if let Some(ref d) = raw.date {
        let parsed = NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map_err(|e| format!("unparsable date {d:?}: {e}"))?;
        return Ok(EventTime::from_date(parsed));
    }

    Err("neither date nor dateTime present".to_string())
}
