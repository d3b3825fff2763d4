//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed (expired or invalid token)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create an error from an HTTP status code and raw response body.
    ///
    /// The API reports failures as `{"error": "..."}` (occasionally
    /// `detail` or `message`); prefer that text over the raw body.
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = extract_server_message(&body).unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.to_string()
            } else {
                body
            }
        });

        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Whether this failure means the access token was rejected and the
    /// caller should refresh and retry.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

/// Pull a human-readable message out of a JSON error body, if any.
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_prefers_server_error_field() {
        let err = ClientError::from_status(
            reqwest::StatusCode::BAD_REQUEST,
            r#"{"error": "Invalid email format"}"#.to_string(),
        );
        match err {
            ClientError::BadRequest(msg) => assert_eq!(msg, "Invalid email format"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn from_status_401_is_auth_expired() {
        let err = ClientError::from_status(
            reqwest::StatusCode::UNAUTHORIZED,
            r#"{"detail": "Token is invalid or expired"}"#.to_string(),
        );
        assert!(err.is_auth_expired());
    }

    #[test]
    fn from_status_falls_back_to_raw_body_then_status() {
        let err = ClientError::from_status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            "plain text failure".to_string(),
        );
        match err {
            ClientError::ServerError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "plain text failure");
            }
            other => panic!("unexpected error variant: {other:?}"),
        }

        let err = ClientError::from_status(reqwest::StatusCode::BAD_GATEWAY, String::new());
        match err {
            ClientError::ServerError { message, .. } => {
                assert!(message.contains("502"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
