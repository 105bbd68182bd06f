//! Google Calendar source configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The two credential strings a user supplies for Google API access:
/// an API key and an OAuth 2.0 client id, both from the Google Cloud
/// Console. These are the only values the application ever stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    /// The Google API key.
    pub api_key: String,
    /// The OAuth 2.0 client id.
    pub client_id: String,
}

impl ApiCredentials {
    /// Creates new credentials.
    pub fn new(api_key: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: client_id.into(),
        }
    }

    /// Validates that the credentials appear correctly formatted.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.api_key.is_empty() {
            return Err("api_key is required");
        }
        if self.client_id.is_empty() {
            return Err("client_id is required");
        }
        if !self.client_id.ends_with(".apps.googleusercontent.com") {
            return Err("client_id should end with .apps.googleusercontent.com");
        }
        Ok(())
    }
}

/// Configuration for the Google Calendar source.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Credentials for API access.
    pub credentials: ApiCredentials,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string for API requests.
    pub user_agent: String,

    /// Maximum number of calendars to list.
    pub calendar_list_max: usize,
}

impl GoogleConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Default cap on the calendar list.
    pub const DEFAULT_CALENDAR_LIST_MAX: usize = 50;

    /// Creates a new configuration with the given credentials.
    pub fn new(credentials: ApiCredentials) -> Self {
        Self {
            credentials,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("daypair/{}", env!("CARGO_PKG_VERSION")),
            calendar_list_max: Self::DEFAULT_CALENDAR_LIST_MAX,
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.credentials
            .validate()
            .map_err(|e| format!("invalid credentials: {}", e))?;

        if self.calendar_list_max == 0 {
            return Err("calendar_list_max must be positive".to_string());
        }

        Ok(())
    }
}
