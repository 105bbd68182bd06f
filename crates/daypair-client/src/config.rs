//! Client configuration.
//!
//! All settings live in a single `config.toml` at
//! `~/.config/daypair/config.toml` by default. The only stored secrets are
//! the two credential strings (`api_key`, `client_id`); both support
//! `env::VAR_NAME` indirection to keep the file itself free of secrets.
//!
//! The session access token is not persisted: it comes from the
//! `DAYPAIR_ACCESS_TOKEN` environment variable (or an `env::` reference in
//! the config) each run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use daypair_providers::google::ApiCredentials;

/// Environment variable consulted for the session access token.
pub const ACCESS_TOKEN_ENV: &str = "DAYPAIR_ACCESS_TOKEN";

/// Configuration for the daypair client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Google API key (supports `env::` indirection).
    pub api_key: Option<String>,

    /// OAuth client id (supports `env::` indirection).
    pub client_id: Option<String>,

    /// Session access token (supports `env::` indirection).
    /// `DAYPAIR_ACCESS_TOKEN` takes precedence when set.
    pub access_token: Option<String>,

    /// Calendar id shown in the left column.
    pub left: Option<String>,

    /// Calendar id shown in the right column.
    pub right: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("daypair")
            .join("config.toml")
    }

    /// Resolves the credential pair, expanding `env::` references.
    pub fn credentials(&self) -> Result<ApiCredentials, String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or("api_key is not set in the config")?;
        let client_id = self
            .client_id
            .as_deref()
            .ok_or("client_id is not set in the config")?;

        Ok(ApiCredentials::new(
            resolve_secret(api_key)?,
            resolve_secret(client_id)?,
        ))
    }

    /// Resolves the session access token.
    ///
    /// Checks `DAYPAIR_ACCESS_TOKEN` first, then the `access_token` config
    /// value (with `env::` expansion).
    pub fn resolved_access_token(&self) -> Result<String, String> {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV)
            && !token.is_empty()
        {
            return Ok(token);
        }

        match self.access_token.as_deref() {
            Some(value) => resolve_secret(value),
            None => Err(format!(
                "no access token: set {} or access_token in the config",
                ACCESS_TOKEN_ENV
            )),
        }
    }
}

/// Resolves a value that may be an `env::VAR_NAME` reference.
///
/// Anything without the prefix is returned unchanged.
pub fn resolve_secret(value: &str) -> Result<String, String> {
    match value.strip_prefix("env::") {
        Some(var) => std::env::var(var)
            .map_err(|_| format!("environment variable `{}` is not set", var)),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_from_file() {
        let file = write_config(
            r#"
            api_key = "AIza-test-key"
            client_id = "abc.apps.googleusercontent.com"
            left = "work@example.com"
            "#,
        );

        let config = ClientConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("AIza-test-key"));
        assert_eq!(config.left.as_deref(), Some("work@example.com"));
        assert!(config.right.is_none());
    }

    #[test]
    fn load_rejects_bad_toml() {
        let file = write_config("api_key = [not toml");
        let err = ClientConfig::load_from(file.path()).unwrap_err();
        assert!(err.contains("parse"));
    }

    #[test]
    fn credentials_require_both_strings() {
        let config = ClientConfig {
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        let err = config.credentials().unwrap_err();
        assert!(err.contains("client_id"));
    }

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(resolve_secret("plain").unwrap(), "plain");
        assert_eq!(
            resolve_secret("abc.apps.googleusercontent.com").unwrap(),
            "abc.apps.googleusercontent.com"
        );
    }

    #[test]
    fn env_reference_resolves() {
        unsafe {
            std::env::set_var("_DAYPAIR_TEST_SECRET", "resolved-value");
        }
        assert_eq!(
            resolve_secret("env::_DAYPAIR_TEST_SECRET").unwrap(),
            "resolved-value"
        );
        unsafe {
            std::env::remove_var("_DAYPAIR_TEST_SECRET");
        }
    }

    #[test]
    fn missing_env_reference_errors() {
        let err = resolve_secret("env::_DAYPAIR_NONEXISTENT_VAR_9321").unwrap_err();
        assert!(err.contains("not set"));
    }

    #[test]
    fn access_token_from_config() {
        let config = ClientConfig {
            access_token: Some("ya29.from-config".to_string()),
            ..Default::default()
        };
        // Assumes DAYPAIR_ACCESS_TOKEN is unset in the test environment.
        assert_eq!(
            config.resolved_access_token().unwrap(),
            "ya29.from-config"
        );
    }

    #[test]
    fn missing_access_token_errors() {
        let config = ClientConfig::default();
        let err = config.resolved_access_token().unwrap_err();
        assert!(err.contains(ACCESS_TOKEN_ENV));
    }
}
