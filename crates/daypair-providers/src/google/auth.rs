//! Explicit session state for the Google identity collaborator.
//!
//! The state of the Google session is a single value that moves forward
//! through three stages, never a set of module-level flags:
//!
//! 1. `Unconfigured`: no credentials accepted yet
//! 2. `Initialized`: credentials validated, no user token
//! 3. `Authorized`: an access token is held for the session
//!
//! The token is obtained out-of-band (the OAuth consent flow is the
//! identity provider's concern) and lives only in memory; nothing here is
//! persisted.

use crate::error::{SourceError, SourceResult};

/// The session state of the Google source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    /// No credentials have been accepted.
    #[default]
    Unconfigured,
    /// Credentials validated; requests still need a user token.
    Initialized,
    /// Holding an access token for this session.
    Authorized {
        /// The OAuth access token.
        access_token: String,
    },
}

impl AuthState {
    /// Returns true once credentials have been accepted.
    pub fn is_initialized(&self) -> bool {
        !matches!(self, Self::Unconfigured)
    }

    /// Returns true when an access token is held.
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }

    /// Returns the access token, if authorized.
    pub fn access_token(&self) -> Option<&str> {
        match self {
            Self::Authorized { access_token } => Some(access_token),
            _ => None,
        }
    }

    /// Returns the access token or an authentication error.
    pub fn require_token(&self) -> SourceResult<&str> {
        self.access_token().ok_or_else(|| {
            SourceError::authentication("no access token - complete the sign-in flow first")
        })
    }
}
