//! Google Calendar API v3 HTTP client.
//!
//! A thin request layer: builds `events.list` and `calendarList.list`
//! calls, follows pagination, and maps HTTP failures onto the source error
//! taxonomy. Payload validation happens later, in [`crate::normalize`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::error::{SourceError, SourceResult};
use crate::raw_event::RawEvent;

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client for one authorized session.
///
/// Cheap to construct: the `reqwest::Client` is shared (it is an `Arc`
/// internally), so the source builds one of these per request batch.
#[derive(Debug)]
pub struct GoogleCalendarClient {
    http: reqwest::Client,
    api_key: String,
    access_token: String,
}

impl GoogleCalendarClient {
    /// Creates a client from a shared HTTP client, the API key and the
    /// session's access token.
    pub fn new(
        http: reqwest::Client,
        api_key: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            access_token: access_token.into(),
        }
    }

    /// Lists the events of a calendar between `time_min` and `time_max`,
    /// with recurring events expanded and results in start-time order.
    ///
    /// Follows `nextPageToken` pagination until the response is exhausted.
    pub async fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> SourceResult<Vec<RawEvent>> {
        let mut all_events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .list_events_page(calendar_id, time_min, time_max, page_token.as_deref())
                .await?;

            all_events.extend(page.items);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(
            "fetched {} events from calendar {}",
            all_events.len(),
            calendar_id
        );
        Ok(all_events)
    }

    /// Fetches a single page of events.
    async fn list_events_page(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
        page_token: Option<&str>,
    ) -> SourceResult<EventListResponse> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(calendar_id)
        );

        let mut request = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("key", self.api_key.clone()),
                ("timeMin", time_min.to_rfc3339()),
                ("timeMax", time_max.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ]);

        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let body = check_status(response).await?;

        serde_json::from_str(&body).map_err(|e| {
            SourceError::invalid_response(format!("failed to parse events response: {}", e))
        })
    }

    /// Lists the calendars the user has access to.
    pub async fn list_calendars(&self, max_results: usize) -> SourceResult<Vec<CalendarEntry>> {
        let url = format!("{}/users/me/calendarList", CALENDAR_API_BASE);

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("key", self.api_key.as_str()),
                ("maxResults", &max_results.to_string()),
            ])
            .send()
            .await
            .map_err(map_transport_error)?;

        let body = check_status(response).await?;

        let list: CalendarListResponse = serde_json::from_str(&body).map_err(|e| {
            SourceError::invalid_response(format!("failed to parse calendar list: {}", e))
        })?;

        Ok(list.items)
    }
}

/// Maps reqwest transport failures onto network errors.
fn map_transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::network("request timeout")
    } else if e.is_connect() {
        SourceError::network(format!("connection failed: {}", e))
    } else {
        SourceError::network(format!("request failed: {}", e))
    }
}

/// Returns the body of a successful response, or the mapped error.
async fn check_status(response: reqwest::Response) -> SourceResult<String> {
    let status = response.status();

    if status.is_success() {
        return response
            .text()
            .await
            .map_err(|e| SourceError::network(format!("failed to read response: {}", e)));
    }

    let retry_after = response
        .headers()
        .get("Retry-After")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();

    Err(status_error(status, retry_after, &body))
}

/// Maps a non-success HTTP status onto the error taxonomy.
fn status_error(
    status: reqwest::StatusCode,
    retry_after: Option<u64>,
    body: &str,
) -> SourceError {
    if status == reqwest::StatusCode::UNAUTHORIZED {
        SourceError::authentication("access token expired or invalid")
    } else if status == reqwest::StatusCode::FORBIDDEN {
        SourceError::authorization("access denied to calendar")
    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        SourceError::rate_limited(format!(
            "rate limit exceeded{}",
            retry_after
                .map(|s| format!(", retry after {} seconds", s))
                .unwrap_or_default()
        ))
    } else {
        SourceError::server(format!("API error ({}): {}", status, body))
    }
}

/// Response from the events.list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventListResponse {
    #[serde(default)]
    items: Vec<RawEvent>,
    next_page_token: Option<String>,
}

/// Response from the calendarList endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarListResponse {
    #[serde(default)]
    items: Vec<CalendarEntry>,
}

/// A calendar from the calendar list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    /// The calendar id.
    pub id: String,
    /// The calendar name.
    pub summary: String,
    /// Whether this is the primary calendar.
    #[serde(default)]
    pub primary: bool,
    /// Background color for display.
    pub background_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceErrorCode;

    #[test]
    fn status_mapping() {
        let err = status_error(reqwest::StatusCode::UNAUTHORIZED, None, "");
        assert_eq!(err.code(), SourceErrorCode::AuthenticationFailed);

        let err = status_error(reqwest::StatusCode::FORBIDDEN, None, "");
        assert_eq!(err.code(), SourceErrorCode::AuthorizationFailed);

        let err = status_error(reqwest::StatusCode::INTERNAL_SERVER_ERROR, None, "backend oops");
        assert_eq!(err.code(), SourceErrorCode::ServerError);
        assert!(err.is_retryable());
        assert!(err.message().contains("backend oops"));
    }

    #[test]
    fn rate_limit_carries_retry_after() {
        let err = status_error(reqwest::StatusCode::TOO_MANY_REQUESTS, Some(30), "");
        assert_eq!(err.code(), SourceErrorCode::RateLimited);
        assert!(err.is_retryable());
        assert!(err.message().contains("30 seconds"));

        let err = status_error(reqwest::StatusCode::TOO_MANY_REQUESTS, None, "");
        assert_eq!(err.message(), "rate limit exceeded");
    }

    #[test]
    fn parse_event_list_response() {
        let json = r#"{
            "items": [
                {
                    "id": "event1",
                    "summary": "Test Meeting",
                    "start": { "dateTime": "2025-03-12T10:00:00Z" },
                    "end": { "dateTime": "2025-03-12T11:00:00Z" },
                    "status": "confirmed"
                }
            ],
            "nextPageToken": "page-2"
        }"#;

        let response: EventListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].effective_title(), "Test Meeting");
        assert_eq!(response.next_page_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn parse_empty_event_list() {
        let response: EventListResponse = serde_json::from_str("{}").unwrap();
        assert!(response.items.is_empty());
        assert!(response.next_page_token.is_none());
    }

    #[test]
    fn parse_calendar_list() {
        let json = r##"{
            "items": [
                {
                    "id": "primary",
                    "summary": "My Calendar",
                    "primary": true,
                    "backgroundColor": "#9fe1e7"
                },
                {
                    "id": "work@example.com",
                    "summary": "Work Calendar"
                }
            ]
        }"##;

        let response: CalendarListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert!(response.items[0].primary);
        assert_eq!(response.items[0].background_color.as_deref(), Some("#9fe1e7"));
        assert!(!response.items[1].primary);
    }
}
