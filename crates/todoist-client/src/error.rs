//! # Client Error Types
//!
//! Unified error handling for the Todoist API client.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
        /// Retry-After hint in seconds, populated for 429 responses
        retry_after: Option<u64>,
    },

    #[error("Authentication failed: {0}")]
    AuthError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid response: {field} - {reason}")]
    InvalidResponse { field: String, reason: String },
}

impl ClientError {
    /// Create an API error from an HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
            retry_after: None,
        }
    }

    /// Create a 429 API error carrying the server's Retry-After hint
    pub fn rate_limited(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Self::ApiError {
            status: 429,
            message: message.into(),
            retry_after,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Create an invalid response error for protocol violations
    ///
    /// Use this when a response is missing required fields or carries
    /// malformed data that should not be silently defaulted.
    pub fn invalid_response(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Status code of the remote failure, if this is an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Retry-After hint in seconds, if the server sent one.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            ClientError::ApiError { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Check if error is recoverable (worth retrying by the caller)
    ///
    /// The client never retries internally; this classifies failures for
    /// callers that own retry policy.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClientError::HttpError(e) => e.is_timeout() || e.is_connect(),
            ClientError::ApiError { status, .. } => *status == 429 || *status >= 500,
            ClientError::InvalidResponse { .. } => false,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Constructor tests ----

    #[test]
    fn test_api_error_constructor() {
        let err = ClientError::api_error(404, "not found");
        match err {
            ClientError::ApiError {
                status,
                message,
                retry_after,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
                assert_eq!(retry_after, None);
            }
            _ => panic!("Expected ApiError variant"),
        }
    }

    #[test]
    fn test_rate_limited_constructor() {
        let err = ClientError::rate_limited("too many requests", Some(60));
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.retry_after(), Some(60));
    }

    #[test]
    fn test_rate_limited_without_hint() {
        let err = ClientError::rate_limited("too many requests", None);
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_invalid_response_constructor() {
        let err = ClientError::invalid_response("task", "empty body");
        match err {
            ClientError::InvalidResponse { field, reason } => {
                assert_eq!(field, "task");
                assert_eq!(reason, "empty body");
            }
            _ => panic!("Expected InvalidResponse variant"),
        }
    }

    // ---- is_recoverable tests ----

    #[test]
    fn test_rate_limit_is_recoverable() {
        assert!(ClientError::rate_limited("slow down", Some(30)).is_recoverable());
    }

    #[test]
    fn test_api_error_500_is_recoverable() {
        assert!(ClientError::api_error(500, "internal server error").is_recoverable());
    }

    #[test]
    fn test_api_error_400_not_recoverable() {
        assert!(!ClientError::api_error(400, "bad request").is_recoverable());
    }

    #[test]
    fn test_api_error_404_not_recoverable() {
        assert!(!ClientError::api_error(404, "not found").is_recoverable());
    }

    #[test]
    fn test_invalid_input_not_recoverable() {
        assert!(!ClientError::InvalidInput("empty name".to_string()).is_recoverable());
    }

    #[test]
    fn test_auth_error_not_recoverable() {
        assert!(!ClientError::AuthError("no token".to_string()).is_recoverable());
    }

    #[test]
    fn test_invalid_response_not_recoverable() {
        assert!(!ClientError::invalid_response("section", "missing").is_recoverable());
    }

    // ---- Display tests ----

    #[test]
    fn test_display_api_error() {
        let err = ClientError::api_error(503, "service down");
        assert_eq!(format!("{err}"), "API error: 503 - service down");
    }

    #[test]
    fn test_display_invalid_input() {
        let err = ClientError::InvalidInput("Section name cannot be empty".to_string());
        assert_eq!(format!("{err}"), "Invalid input: Section name cannot be empty");
    }

    #[test]
    fn test_display_auth_error() {
        let err = ClientError::AuthError("no token found".to_string());
        assert_eq!(format!("{err}"), "Authentication failed: no token found");
    }

    #[test]
    fn test_display_config_error() {
        let err = ClientError::config_error("bad config file");
        assert_eq!(format!("{err}"), "Configuration error: bad config file");
    }

    // ---- From impls ----

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::SerializationError(_)));
    }

    #[test]
    fn test_status_accessor_non_api_error() {
        assert_eq!(ClientError::AuthError("x".to_string()).status(), None);
    }
}
