//! Client error types.

use thiserror::Error;

use daypair_core::tracing::TracingError;
use daypair_providers::SourceError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur in the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Calendar source error.
    #[error("calendar source error: {0}")]
    Source(#[from] SourceError),

    /// Logging setup error.
    #[error(transparent)]
    Tracing(#[from] TracingError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
