/*
[INPUT]:  Error sources (HTTP transport, API envelopes, serialization, configuration)
[OUTPUT]: Structured error types carrying API status and message
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing status classification
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Shipwire connector
#[derive(Error, Debug)]
pub enum ShipwireError {
    /// Credentials were rejected (status 401)
    #[error("Authorization failed (status {status}): {message}")]
    Authorization { message: String, status: u16 },

    /// The request was malformed or invalid (status 400)
    #[error("Invalid request (status {status}): {message}")]
    Request { message: String, status: u16 },

    /// Any other API or HTTP level failure
    #[error("Shipwire connection error (status {status}): {message}")]
    Connection { message: String, status: u16 },

    /// The request produced no response to classify
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Missing credentials or otherwise unusable settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The envelope did not carry what the caller asked for
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ShipwireError {
    /// Classify a failure status: 401 and 400 get dedicated variants,
    /// everything else is a connection error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ShipwireError::Authorization { message, status },
            400 => ShipwireError::Request { message, status },
            _ => ShipwireError::Connection { message, status },
        }
    }

    /// Classify a raw HTTP failure, falling back to the canonical reason
    /// phrase when the server sent no body.
    pub fn from_http_status(status: StatusCode, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        } else {
            body.trim().to_string()
        };
        Self::from_status(status.as_u16(), message)
    }

    /// API or HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ShipwireError::Authorization { status, .. }
            | ShipwireError::Request { status, .. }
            | ShipwireError::Connection { status, .. } => Some(*status),
            ShipwireError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error indicates rejected or missing credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ShipwireError::Authorization { .. })
    }
}

/// Result type alias for Shipwire operations
pub type Result<T> = std::result::Result<T, ShipwireError>;
