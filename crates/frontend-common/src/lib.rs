//! Shared frontend library for the MindWell web application: auth
//! context, API clients, idle-session monitoring, toasts and form
//! validation.

pub mod auth;
pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod idle;
pub mod services;
pub mod session;
pub mod toast;
pub mod validation;

pub use auth::context::{use_auth, use_is_authenticated, AuthAction, AuthContext, AuthProvider};
pub use client::{create_authenticated_client, create_public_client, set_auth_token};
pub use components::{SessionTimeout, Spinner};
pub use config::AuthConfig;
pub use session::TokenStore;
pub use toast::{show_toast, use_toast, ToastAction, ToastContext, ToastKind, ToastProvider};
