//! CLI error types.

use address_book::ValidationError;
use address_client::ApiError;
use thiserror::Error;

/// Errors surfaced by a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Request to the address API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Form input did not pass validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// JSON output could not be rendered.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No address with the given id in the current list.
    #[error("No address with id {0}")]
    NotFound(String),

    /// The address exists locally but the server never gave it an id.
    #[error("Address {0} has no server id and cannot be changed")]
    NoServerId(String),
}

impl CliError {
    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            CliError::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message() {
        let err = CliError::from(ApiError::Status {
            status: 422,
            body: Some(json!({ "error": "Pincode not serviceable" })),
        });
        assert_eq!(err.user_message(), "Pincode not serviceable");

        let err = CliError::from(ValidationError::Empty("city".into()));
        assert_eq!(err.user_message(), "city cannot be empty");

        let err = CliError::NotFound("9".into());
        assert_eq!(err.user_message(), "No address with id 9");
    }
}
