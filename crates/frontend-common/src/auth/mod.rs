//! Authentication module

pub mod context;
pub mod error_messages;
pub mod session_expired;

// Re-export commonly used items
pub use context::{
    logout, use_auth, use_is_authenticated, AuthAction, AuthContext, AuthContextData, AuthProvider,
};
pub use error_messages::user_facing_message;
