//! Shared helper functions for MCP tool implementations.

use serde::Serialize;
use todoist_client::ClientError;

/// Build a structured error JSON string that LLMs can parse.
pub fn error_json(error_code: &str, message: &str) -> String {
    serde_json::json!({
        "error": error_code,
        "message": message,
    })
    .to_string()
}

/// Map a client error to a structured error JSON string.
///
/// API errors keep their status code (and the Retry-After hint for 429) so
/// the agent can decide whether to retry.
pub fn client_error_json(err: &ClientError) -> String {
    let code = match err {
        ClientError::InvalidInput(_) => "validation_error",
        ClientError::ApiError { .. } => "api_error",
        ClientError::AuthError(_) => "auth_error",
        ClientError::HttpError(_) => "transport_error",
        ClientError::SerializationError(_) => "serialization_error",
        ClientError::ConfigError(_) => "config_error",
        ClientError::InvalidResponse { .. } => "invalid_response",
    };

    if let ClientError::ApiError {
        status,
        retry_after,
        ..
    } = err
    {
        return serde_json::json!({
            "error": code,
            "message": err.to_string(),
            "status": status,
            "retry_after": retry_after,
        })
        .to_string();
    }

    error_json(code, &err.to_string())
}

/// Serialize a tool result to pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| error_json("serialization_error", &e.to_string()))
}

/// Acknowledge an operation whose success response had no body.
pub fn ack_json(action: &str, id: &str) -> String {
    serde_json::json!({
        "status": "ok",
        "action": action,
        "id": id,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_shape() {
        let s = error_json("validation_error", "Order must be a positive integer");
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["error"], "validation_error");
        assert!(v["message"].as_str().unwrap().contains("positive integer"));
    }

    #[test]
    fn test_client_error_json_rate_limit_carries_hint() {
        let err = ClientError::rate_limited("slow down", Some(60));
        let v: serde_json::Value = serde_json::from_str(&client_error_json(&err)).unwrap();
        assert_eq!(v["error"], "api_error");
        assert_eq!(v["status"], 429);
        assert_eq!(v["retry_after"], 60);
    }

    #[test]
    fn test_client_error_json_validation() {
        let err = ClientError::InvalidInput("Section name cannot be empty".to_string());
        let v: serde_json::Value = serde_json::from_str(&client_error_json(&err)).unwrap();
        assert_eq!(v["error"], "validation_error");
    }
}
