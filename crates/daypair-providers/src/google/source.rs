//! Google Calendar source implementation.
//!
//! This module implements the [`EventSource`] trait for Google Calendar.

use std::sync::RwLock;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use daypair_core::{CalendarEvent, DayBounds};

use crate::error::{SourceError, SourceResult};
use crate::normalize::normalize_event;
use crate::source::{BoxFuture, CalendarInfo, EventSource};

use super::auth::AuthState;
use super::client::GoogleCalendarClient;
use super::config::GoogleConfig;

/// Google Calendar source.
///
/// Holds the validated configuration, a shared HTTP client, and the
/// session's [`AuthState`]. `Send + Sync`: the day view fetches its two
/// columns concurrently from one shared instance.
#[derive(Debug)]
pub struct GoogleSource {
    config: GoogleConfig,
    http: reqwest::Client,
    state: RwLock<AuthState>,
}

impl GoogleSource {
    /// Creates a new source with the given configuration.
    ///
    /// Validating the credentials moves the session to
    /// [`AuthState::Initialized`]; requests additionally need
    /// [`authorize`](Self::authorize) to be called with an access token.
    pub fn new(config: GoogleConfig) -> SourceResult<Self> {
        config.validate().map_err(SourceError::configuration)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .expect("failed to create HTTP client");

        Ok(Self {
            config,
            http,
            state: RwLock::new(AuthState::Initialized),
        })
    }

    /// Accepts an access token obtained from the external sign-in flow and
    /// moves the session to [`AuthState::Authorized`].
    pub fn authorize(&self, access_token: impl Into<String>) {
        *self.state.write().unwrap() = AuthState::Authorized {
            access_token: access_token.into(),
        };
        info!("google session authorized");
    }

    /// Returns a snapshot of the current session state.
    pub fn auth_state(&self) -> AuthState {
        self.state.read().unwrap().clone()
    }

    /// Builds an API client for the current session, or fails if the
    /// session holds no token.
    fn client(&self) -> SourceResult<GoogleCalendarClient> {
        let state = self.state.read().unwrap();
        let token = state.require_token()?;
        Ok(GoogleCalendarClient::new(
            self.http.clone(),
            &self.config.credentials.api_key,
            token,
        ))
    }

    /// Fetches and normalizes one day of events for one calendar.
    async fn fetch_day(
        &self,
        calendar_id: &str,
        date: NaiveDate,
    ) -> SourceResult<Vec<CalendarEvent>> {
        let client = self.client()?;
        let bounds = DayBounds::for_date(date, &Local);

        let raw = client
            .list_events(calendar_id, bounds.time_min, bounds.time_max)
            .await?;

        let mut events = Vec::with_capacity(raw.len());
        for event in &raw {
            if event.is_cancelled() {
                continue;
            }
            events.push(normalize_event(event, calendar_id)?);
        }

        debug!(
            "calendar {}: {} events on {}",
            calendar_id,
            events.len(),
            date
        );
        Ok(events)
    }

    /// Lists available calendars.
    async fn fetch_calendars(&self) -> SourceResult<Vec<CalendarInfo>> {
        let client = self.client()?;
        let entries = client
            .list_calendars(self.config.calendar_list_max)
            .await?;

        Ok(entries
            .into_iter()
            .map(|entry| {
                let mut info =
                    CalendarInfo::new(&entry.id, &entry.summary).with_primary(entry.primary);
                if let Some(color) = entry.background_color {
                    info = info.with_background_color(color);
                }
                info
            })
            .collect())
    }
}

impl EventSource for GoogleSource {
    fn name(&self) -> &str {
        "google"
    }

    fn is_ready(&self) -> bool {
        self.state.read().unwrap().is_authorized()
    }

    fn list_calendars(&self) -> BoxFuture<'_, SourceResult<Vec<CalendarInfo>>> {
        Box::pin(async move { self.fetch_calendars().await })
    }

    fn events_on<'a>(
        &'a self,
        calendar_id: &'a str,
        date: NaiveDate,
    ) -> BoxFuture<'a, SourceResult<Vec<CalendarEvent>>> {
        Box::pin(async move { self.fetch_day(calendar_id, date).await })
    }
}
