/*
[INPUT]:  Error sources (HTTP transport, API responses, serialization)
[OUTPUT]: Structured error types with user-facing message extraction
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the StudyCast adapter
#[derive(Error, Debug)]
pub enum StudycastError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl StudycastError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        StudycastError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// The text shown to the user when a submission fails.
    ///
    /// For API errors this is the backend's own `error` string verbatim;
    /// transport and decoding failures fall back to the Display form.
    pub fn user_message(&self) -> String {
        match self {
            StudycastError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Check if the error carries a server-assigned status code
    pub fn status(&self) -> Option<u16> {
        match self {
            StudycastError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for StudyCast operations
pub type Result<T> = std::result::Result<T, StudycastError>;
