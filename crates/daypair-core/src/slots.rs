//! The hourly slot grid.
//!
//! [`build_slots`] turns a day's worth of events into the fixed 06:00–23:00
//! busy/free grid the day view renders. The function is pure: the reference
//! date is an explicit parameter, so the same input always produces the same
//! grid.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::CalendarEvent;

/// First hour of the grid (06:00).
pub const FIRST_HOUR: u32 = 6;

/// Last hour of the grid (the 23:00–24:00 slot).
pub const LAST_HOUR: u32 = 23;

/// Number of slots in the grid.
pub const SLOT_COUNT: usize = (LAST_HOUR - FIRST_HOUR + 1) as usize;

/// One hour-wide cell in the daily grid.
///
/// Slots are recomputed from scratch on every render and carry no identity
/// beyond their hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourSlot {
    /// The hour this slot covers, as `[hour:00, hour+1:00)`.
    pub hour: u32,
    /// Display label ("6 AM" … "11 PM").
    pub label: String,
    /// Whether at least one timed event overlaps this slot.
    pub busy: bool,
    /// The overlapping events, in input order.
    pub events: Vec<CalendarEvent>,
}

/// Builds the 18-slot grid for `reference` from the given events.
///
/// A timed event occupies slot H when its local start is strictly before
/// H+1:00 and its local end is strictly after H:00 (half-open interval
/// overlap). Only the event's time-of-day participates in the comparison:
/// both boundaries are anchored on the reference date, so callers are
/// expected to pass only events of the displayed day. All-day events occupy
/// no slot.
pub fn build_slots(reference: NaiveDate, events: &[CalendarEvent]) -> Vec<HourSlot> {
    (FIRST_HOUR..=LAST_HOUR)
        .map(|hour| {
            let slot_start = reference
                .and_hms_opt(hour, 0, 0)
                .expect("grid hour within 0..24");
            let slot_end = slot_start + Duration::hours(1);

            let overlapping: Vec<CalendarEvent> = events
                .iter()
                .filter(|event| overlaps(reference, event, slot_start, slot_end))
                .cloned()
                .collect();

            HourSlot {
                hour,
                label: format_hour(hour),
                busy: !overlapping.is_empty(),
                events: overlapping,
            }
        })
        .collect()
}

/// Half-open overlap of an event with one slot window.
fn overlaps(
    reference: NaiveDate,
    event: &CalendarEvent,
    slot_start: NaiveDateTime,
    slot_end: NaiveDateTime,
) -> bool {
    let (Some(start), Some(end)) = (
        event.start.local_clock_time(),
        event.end.local_clock_time(),
    ) else {
        // All-day times carry no clock component and never occupy a slot.
        return false;
    };

    let event_start = reference.and_time(start);
    let event_end = reference.and_time(end);
    event_start < slot_end && event_end > slot_start
}

/// Formats an hour of day on a 12-hour clock, no leading zero.
///
/// Total over `0..=23`: 0 is "12 AM", 12 is "12 PM".
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h < 12 => format!("{h} AM"),
        h => format!("{} PM", h - 12),
    }
}
