//! Authentication API service (public endpoints plus token blacklisting)

use crate::client::create_public_client;
use mindwell_http::client::ClientError;
use mindwell_http::types::{
    BlacklistRequest, CheckEmailRequest, CheckEmailResponse, RegisterRequest, SendOtpRequest,
    SendOtpResponse, TokenPair, VerifyOtpRequest, VerifyOtpResponse,
};
use reqwest::Method;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    pub fn new() -> Self {
        Self
    }

    /// Ask whether an account exists for this email address.
    pub async fn check_email(&self, email: &str) -> Result<CheckEmailResponse, ClientError> {
        let client = create_public_client()?;
        let request = CheckEmailRequest {
            email: email.to_owned(),
        };
        client
            .execute(
                client
                    .request(Method::POST, "/api/auth/check-email/")
                    .json(&request),
            )
            .await
    }

    /// Request a one-time code to be emailed to this address.
    pub async fn send_otp(&self, email: &str) -> Result<SendOtpResponse, ClientError> {
        let client = create_public_client()?;
        let request = SendOtpRequest {
            email: email.to_owned(),
        };
        client
            .execute(
                client
                    .request(Method::POST, "/api/auth/send-otp/")
                    .json(&request),
            )
            .await
    }

    /// Verify the emailed code. Known users receive a token pair.
    pub async fn verify_otp(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<VerifyOtpResponse, ClientError> {
        let client = create_public_client()?;
        let request = VerifyOtpRequest {
            email: email.to_owned(),
            otp: otp.to_owned(),
        };
        client
            .execute(
                client
                    .request(Method::POST, "/api/auth/verify-otp/")
                    .json(&request),
            )
            .await
    }

    /// Register a new user; returns the initial token pair.
    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenPair, ClientError> {
        let client = create_public_client()?;
        client
            .execute(
                client
                    .request(Method::POST, "/api/auth/register/")
                    .json(request),
            )
            .await
    }

    /// Ask the server to blacklist the refresh token. Requires bearer
    /// auth; used during logout, where failures are tolerated.
    pub async fn blacklist(&self, pair: &TokenPair) -> Result<(), ClientError> {
        let client = create_public_client()?;
        let request = BlacklistRequest {
            refresh: pair.refresh.clone(),
        };
        let _: serde_json::Value = client
            .execute(
                client
                    .request(Method::POST, "/api/token/blacklist/")
                    .bearer_auth(&pair.access)
                    .json(&request),
            )
            .await?;
        Ok(())
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
