//! Core types: time, events, the hourly slot grid, formatting

pub mod date;
pub mod event;
pub mod slots;
pub mod time;
pub mod tracing;

pub use date::{add_days, date_string, format_display_date, is_today};
pub use event::CalendarEvent;
pub use slots::{FIRST_HOUR, HourSlot, LAST_HOUR, SLOT_COUNT, build_slots, format_hour};
pub use time::{DayBounds, EventTime};
pub use tracing::{LogFormat, TracingConfig, TracingError, init_tracing};
