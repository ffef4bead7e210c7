//! Error handling for the AquaGuard client
//!
//! Backend failures are captured as [`ApiError`] by the HTTP client and
//! converted to a [`ClientError`] at the flow boundary, where they become a
//! notification plus a state transition.

use shared::{DerivationError, InvalidField};
use thiserror::Error;

use crate::notification::Notification;

/// Failure talking to the backend
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid endpoint url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    // Intake
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    // Dashboard
    #[error("Failed to load dashboard: {0}")]
    Fetch(String),

    // Setup
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ClientError {
    /// Intake POST failed
    pub fn submission(err: ApiError) -> Self {
        match err {
            ApiError::Transport(e) if e.is_timeout() => {
                ClientError::Submission("the server took too long to respond".to_string())
            }
            ApiError::Transport(_) => {
                ClientError::Submission("could not reach the server".to_string())
            }
            ApiError::Status { status, .. } => {
                ClientError::Submission(format!("the server rejected the farm data ({})", status))
            }
            other => ClientError::Submission(other.to_string()),
        }
    }

    /// Dashboard GET failed
    pub fn fetch(err: ApiError) -> Self {
        if err.is_not_found() {
            return ClientError::Fetch("farm not found".to_string());
        }
        match err {
            ApiError::Transport(_) => ClientError::Fetch("could not reach the server".to_string()),
            ApiError::Status { status, .. } => {
                ClientError::Fetch(format!("the server returned an error ({})", status))
            }
            ApiError::Decode(e) => ClientError::Fetch(format!("unexpected dashboard data: {}", e)),
            ApiError::InvalidUrl(url) => ClientError::Fetch(format!("invalid url {}", url)),
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Validation { .. } => "VALIDATION_ERROR",
            ClientError::Submission(_) => "SUBMISSION_ERROR",
            ClientError::InvalidStateTransition(_) => "INVALID_STATE_TRANSITION",
            ClientError::Fetch(_) => "FETCH_ERROR",
            ClientError::Configuration(_) | ClientError::Config(_) => "CONFIGURATION_ERROR",
            ClientError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// User-facing notification for this error
    pub fn notification(&self) -> Notification {
        let title = match self {
            ClientError::Validation { .. } => "Check your input",
            ClientError::Submission(_) => "Submission failed",
            ClientError::InvalidStateTransition(_) => "Please wait",
            ClientError::Fetch(_) => "Failed to load dashboard data",
            ClientError::Configuration(_) | ClientError::Config(_) => "Configuration problem",
            ClientError::Internal(_) => "Something went wrong",
        };
        Notification::error(title, self.to_string())
    }
}

impl From<InvalidField> for ClientError {
    fn from(err: InvalidField) -> Self {
        ClientError::Validation {
            field: err.field.to_string(),
            message: err.message.to_string(),
        }
    }
}

impl From<DerivationError> for ClientError {
    fn from(err: DerivationError) -> Self {
        ClientError::Fetch(format!("incomplete dashboard data: {}", err))
    }
}

/// Result type alias for the client
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_fetch_error() {
        let err = ClientError::fetch(ApiError::Status {
            status: 404,
            body: "{\"detail\":\"Farmer not found\"}".to_string(),
        });
        assert!(matches!(err, ClientError::Fetch(ref msg) if msg == "farm not found"));
        assert_eq!(err.code(), "FETCH_ERROR");
    }

    #[test]
    fn empty_series_is_a_fetch_error() {
        let err = ClientError::from(DerivationError::EmptySoilMoisture);
        assert_eq!(err.code(), "FETCH_ERROR");
        assert!(err.to_string().contains("soil moisture"));
    }

    #[test]
    fn server_error_becomes_submission_error() {
        let err = ClientError::submission(ApiError::Status {
            status: 500,
            body: String::new(),
        });
        assert_eq!(err.code(), "SUBMISSION_ERROR");
        assert_eq!(err.notification().title, "Submission failed");
    }

    #[test]
    fn invalid_field_keeps_field_name() {
        let err = ClientError::from(shared::validate_intake("x", "1", "corn").unwrap_err());
        assert!(matches!(err, ClientError::Validation { ref field, .. } if field == "latitude"));
    }
}
