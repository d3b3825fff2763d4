//! Durable token storage
//!
//! The session is two strings in localStorage under fixed keys. A pair is
//! only considered present when both halves are; a lone token is treated
//! as no session at all.

use crate::config::AuthConfig;
use gloo::storage::{LocalStorage, Storage};
use mindwell_http::types::TokenPair;

pub struct TokenStore;

impl TokenStore {
    /// Load the stored pair, if both tokens are present.
    pub fn load() -> Option<TokenPair> {
        let access: String = LocalStorage::get(AuthConfig::ACCESS_TOKEN_KEY).ok()?;
        let refresh: String = LocalStorage::get(AuthConfig::REFRESH_TOKEN_KEY).ok()?;
        Some(TokenPair { access, refresh })
    }

    pub fn save(pair: &TokenPair) {
        let _ = LocalStorage::set(AuthConfig::ACCESS_TOKEN_KEY, &pair.access);
        let _ = LocalStorage::set(AuthConfig::REFRESH_TOKEN_KEY, &pair.refresh);
    }

    pub fn clear() {
        LocalStorage::delete(AuthConfig::ACCESS_TOKEN_KEY);
        LocalStorage::delete(AuthConfig::REFRESH_TOKEN_KEY);
    }

    pub fn refresh_token() -> Option<String> {
        Self::load().map(|pair| pair.refresh)
    }
}
