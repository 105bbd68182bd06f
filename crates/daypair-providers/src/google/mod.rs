//! Google Calendar source.
//!
//! Fetches calendars and events from the Google Calendar API v3 using the
//! two credential strings the user supplies (API key + OAuth client id)
//! plus a per-session access token.
//!
//! # Session flow
//!
//! 1. Build a [`GoogleConfig`] from the stored credentials
//! 2. `GoogleSource::new` validates them; the session is `Initialized`
//! 3. The external sign-in flow yields an access token;
//!    [`GoogleSource::authorize`] moves the session to `Authorized`
//! 4. `list_calendars` / `events_on` serve the day view
//!
//! The token is never written to disk; only the credential strings are
//! stored, by the client's config layer.

mod auth;
mod client;
mod config;
mod source;

pub use auth::AuthState;
pub use client::{CalendarEntry, GoogleCalendarClient};
pub use config::{ApiCredentials, GoogleConfig};
pub use source::GoogleSource;
