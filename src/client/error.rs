//! Client Error Types
//!
//! Every failure the client can produce, plus the reduction to the single
//! human-readable message that views display.

use thiserror::Error;

/// Message shown when nothing more specific is available
pub const FALLBACK_MESSAGE: &str = "An error occurred";

/// Errors that can occur when talking to the Language Portal API
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The HTTP client's request timeout elapsed
    #[error("Request timeout")]
    Timeout,

    /// The server answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Parse error: {0}")]
    Decode(String),

    /// The request could not be built (bad base URL, unserializable body)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// The message a view renders in place of its content.
    ///
    /// Server-provided messages win; otherwise the error's own description
    /// is used. Never empty.
    pub fn user_message(&self) -> String {
        let message = match self {
            ClientError::Api { message, .. } => message.trim().to_string(),
            other => other.to_string(),
        };

        if message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// HTTP status when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else if e.is_builder() {
            ClientError::InvalidRequest(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Pull a human-readable message out of a structured error body.
///
/// Accepts `{"message": ".."}`, `{"error": ".."}` and
/// `{"error": {"message": ".."}}`. Returns `None` for anything else,
/// including blank messages.
pub fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    let candidates = [
        body.get("message"),
        body.get("error"),
        body.get("error").and_then(|e| e.get("message")),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message_field() {
        let body = json!({ "message": "Word not found", "code": "NOT_FOUND" });
        assert_eq!(extract_error_message(&body).as_deref(), Some("Word not found"));
    }

    #[test]
    fn test_extract_error_field() {
        let body = json!({ "error": "invalid word ID" });
        assert_eq!(extract_error_message(&body).as_deref(), Some("invalid word ID"));
    }

    #[test]
    fn test_extract_nested_error() {
        let body = json!({ "error": { "code": "X", "message": "nested" } });
        assert_eq!(extract_error_message(&body).as_deref(), Some("nested"));
    }

    #[test]
    fn test_message_preferred_over_error() {
        let body = json!({ "message": "first", "error": "second" });
        assert_eq!(extract_error_message(&body).as_deref(), Some("first"));
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_error_message(&json!({ "message": "   " })).is_none());
        assert!(extract_error_message(&json!([1, 2])).is_none());
        assert!(extract_error_message(&serde_json::Value::Null).is_none());
    }

    #[test]
    fn test_user_message_never_empty() {
        let err = ClientError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);

        let err = ClientError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error: connection refused");
    }

    #[test]
    fn test_not_found() {
        let err = ClientError::Api {
            status: 404,
            message: "missing".to_string(),
        };
        assert!(err.is_not_found());
        assert!(!ClientError::Timeout.is_not_found());
    }
}
