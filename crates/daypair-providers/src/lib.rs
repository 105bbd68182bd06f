//! EventSource trait and the Google Calendar implementation.
//!
//! This crate is the data layer of daypair:
//!
//! - [`EventSource`] - the trait the day view consumes
//! - [`RawEvent`] - event payloads as the API returns them
//! - [`normalize_event`] - the validation boundary to core's `CalendarEvent`
//! - [`SourceError`] - the error taxonomy for everything above
//! - [`google`] - the Google Calendar API v3 implementation

pub mod error;
pub mod google;
pub mod normalize;
pub mod raw_event;
pub mod source;

pub use error::{SourceError, SourceErrorCode, SourceResult};
pub use normalize::normalize_event;
pub use raw_event::{RawEvent, RawTime};
pub use source::{BoxFuture, CalendarInfo, EventSource};
