//! User-friendly error message mappings

use mindwell_http::client::ClientError;

/// Pick the message to show the user for a failed API call.
///
/// Server-provided text is preferred; transport and decoding failures
/// fall back to the caller's generic message.
pub fn user_facing_message(error: &ClientError, fallback: &str) -> String {
    let server_message = match error {
        ClientError::BadRequest(msg)
        | ClientError::AuthenticationFailed(msg)
        | ClientError::Forbidden(msg)
        | ClientError::NotFound(msg) => Some(msg),
        ClientError::ServerError { message, .. } => Some(message),
        ClientError::Request(_) | ClientError::Serialization(_) | ClientError::Configuration(_) => {
            None
        }
    };

    match server_message {
        Some(msg) if !msg.trim().is_empty() => msg.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_server_message() {
        let err = ClientError::BadRequest("NHS Number must be 10 digits long.".into());
        assert_eq!(
            user_facing_message(&err, "Registration failed."),
            "NHS Number must be 10 digits long."
        );
    }

    #[test]
    fn falls_back_for_transport_errors() {
        let err = ClientError::Configuration("base_url is required".into());
        assert_eq!(
            user_facing_message(&err, "Failed to send OTP. Please try again."),
            "Failed to send OTP. Please try again."
        );
    }

    #[test]
    fn falls_back_for_blank_server_message() {
        let err = ClientError::NotFound(String::new());
        assert_eq!(user_facing_message(&err, "Not found."), "Not found.");
    }
}
