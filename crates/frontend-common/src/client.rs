//! Client configuration and initialization

use crate::client_wrapper::WrappedAuthClient;
use crate::session::TokenStore;
pub use mindwell_http::client::ClientError;
use mindwell_http::client::{AuthenticatedClient, PublicClient, TypedClientBuilder};
use mindwell_http::types::{RefreshRequest, TokenPair};
use once_cell::sync::Lazy;
use std::sync::Mutex;
use web_sys::window;

/// Global client instances
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicClient>>> = Lazy::new(|| Mutex::new(None));
static AUTH_CLIENT: Lazy<Mutex<Option<WrappedAuthClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the base URL for API calls
fn api_base_url() -> String {
    if let Some(window) = window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Default to relative URLs
    String::new()
}

/// Get the public client instance (for unauthenticated endpoints)
pub fn create_public_client() -> Result<PublicClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let client = TypedClientBuilder::new()
        .base_url(api_base_url())
        .build_public()?;
    *client_lock = Some(client.clone());
    Ok(client)
}

/// Get the authenticated client instance (returns None if not authenticated)
pub fn create_authenticated_client() -> Result<Option<WrappedAuthClient>, ClientError> {
    let client_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");
    Ok(client_lock.clone())
}

/// Install (or clear) the bearer token on the shared authenticated client
pub fn set_auth_token(token: Option<&str>) -> Result<(), ClientError> {
    let mut auth_lock = AUTH_CLIENT
        .lock()
        .expect("Failed to acquire auth client lock");

    match token {
        Some(token) => {
            let client = build_authenticated(token)?;
            *auth_lock = Some(WrappedAuthClient::new(client));
        }
        None => {
            *auth_lock = None;
        }
    }

    Ok(())
}

fn build_authenticated(token: &str) -> Result<AuthenticatedClient, ClientError> {
    TypedClientBuilder::new()
        .base_url(api_base_url())
        .build_authenticated(token)
}

/// Exchange the stored refresh token for a fresh pair, persist it and
/// reinstall the shared authenticated client.
///
/// On any failure the session-expired handler is triggered so the auth
/// provider can force a local logout.
pub(crate) async fn refresh_session() -> Result<AuthenticatedClient, ClientError> {
    let refresh = TokenStore::refresh_token().ok_or_else(|| {
        crate::auth::session_expired::trigger();
        ClientError::AuthenticationFailed("no refresh token stored".into())
    })?;

    let public = create_public_client()?;
    let request = public
        .request(reqwest::Method::POST, "/api/auth/refresh/")
        .json(&RefreshRequest { refresh });

    let pair: TokenPair = match public.execute(request).await {
        Ok(pair) => pair,
        Err(err) => {
            tracing::warn!(error = %err, "token refresh failed");
            crate::auth::session_expired::trigger();
            return Err(err);
        }
    };

    TokenStore::save(&pair);
    let client = build_authenticated(&pair.access)?;
    {
        let mut auth_lock = AUTH_CLIENT
            .lock()
            .expect("Failed to acquire auth client lock");
        *auth_lock = Some(WrappedAuthClient::new(client.clone()));
    }

    Ok(client)
}
