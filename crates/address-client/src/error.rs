//! Error types for address-client.

use serde_json::Value;
use thiserror::Error;

/// Shown when nothing more specific can be extracted from an error.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors that can occur when talking to the address API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status.
    #[error("Request failed with status {status}")]
    Status {
        status: u16,
        /// Parsed error body, if it was JSON.
        body: Option<Value>,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of a server error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Checks the error body's `message`, then its `error`, then the
    /// underlying error's own text (without the variant prefix), then
    /// [`FALLBACK_MESSAGE`] when that text is blank.
    pub fn user_message(&self) -> String {
        if let ApiError::Status { body: Some(body), .. } = self {
            let from_body = ["message", "error"].iter().find_map(|key| {
                body.get(*key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
            });
            if let Some(text) = from_body {
                return text.to_string();
            }
        }

        let description = match self {
            ApiError::Http(e) => e.to_string(),
            ApiError::Json(e) => e.to_string(),
            ApiError::Status { .. } => self.to_string(),
            ApiError::Config(msg) => msg.clone(),
        };
        let description = description.trim();
        if description.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            description.to_string()
        }
    }
}

/// Result type for address API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
