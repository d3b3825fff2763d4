//! Frontend configuration

/// Authentication and session configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Forced logout after this much inactivity
    pub const IDLE_TIMEOUT_MS: f64 = 15.0 * 60.0 * 1000.0; // 15 minutes

    /// Warning countdown starts this long before the forced logout
    pub const WARNING_LEAD_MS: f64 = 60.0 * 1000.0; // 60 seconds

    /// Cooldown between OTP resend requests
    pub const OTP_RESEND_COOLDOWN_SECS: u32 = 60;

    /// Local storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Local storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// Toasts auto-dismiss after this long
    pub const TOAST_DISMISS_MS: u32 = 6_000;
}
