//! Request and response bodies for the MindWell authentication API.

use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued on login, registration and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckEmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckEmailResponse {
    pub exists: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Response to OTP verification. Known users get a token pair back;
/// unknown users only learn that the address verified.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpResponse {
    pub exists: bool,
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub refresh: Option<String>,
}

impl VerifyOtpResponse {
    /// Token pair, present only when both halves were issued.
    pub fn token_pair(&self) -> Option<TokenPair> {
        match (&self.access, &self.refresh) {
            (Some(access), Some(refresh)) => Some(TokenPair {
                access: access.clone(),
                refresh: refresh.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub nhs_number: String,
    pub nhs_consent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlacklistRequest {
    pub refresh: String,
}

/// Profile as returned by `user-info` and `update-profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub mobile_number: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub nhs_number: Option<String>,
    #[serde(default)]
    pub nhs_consent: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub date_of_birth: String,
    pub nhs_number: String,
}

/// One entry of the per-user activity log.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityLogEntry {
    pub action: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_otp_response_with_tokens() {
        let body = r#"{"exists": true, "access": "a.b.c", "refresh": "d.e.f"}"#;
        let resp: VerifyOtpResponse = serde_json::from_str(body).unwrap();
        assert!(resp.exists);
        let pair = resp.token_pair().unwrap();
        assert_eq!(pair.access, "a.b.c");
        assert_eq!(pair.refresh, "d.e.f");
    }

    #[test]
    fn verify_otp_response_without_tokens() {
        let body = r#"{"exists": false}"#;
        let resp: VerifyOtpResponse = serde_json::from_str(body).unwrap();
        assert!(!resp.exists);
        assert!(resp.token_pair().is_none());
    }

    #[test]
    fn verify_otp_response_with_partial_tokens_yields_no_pair() {
        let body = r#"{"exists": true, "access": "a.b.c"}"#;
        let resp: VerifyOtpResponse = serde_json::from_str(body).unwrap();
        assert!(resp.token_pair().is_none());
    }

    #[test]
    fn activity_log_entry_optional_fields() {
        let body = r#"[
            {"action": "login", "timestamp": "2025-05-26T10:15:00Z", "ip_address": "10.0.0.1", "details": "otp login"},
            {"action": "profile_update", "timestamp": "2025-05-26T11:00:00+00:00"}
        ]"#;
        let logs: Vec<ActivityLogEntry> = serde_json::from_str(body).unwrap();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].ip_address.as_deref(), Some("10.0.0.1"));
        assert!(logs[1].ip_address.is_none());
        assert!(logs[1].details.is_none());
    }

    #[test]
    fn user_info_tolerates_missing_optionals() {
        let body = r#"{"id": 7, "email": "a@b.co", "first_name": "Ada", "last_name": "Lovelace",
                       "mobile_number": "+447123456789", "date_of_birth": "1990-01-01"}"#;
        let user: UserInfo = serde_json::from_str(body).unwrap();
        assert_eq!(user.nhs_number, None);
        assert!(!user.nhs_consent);
    }
}
