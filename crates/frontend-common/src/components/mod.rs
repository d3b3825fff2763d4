//! Shared UI components

pub mod session_timeout;
pub mod spinner;

pub use session_timeout::SessionTimeout;
pub use spinner::Spinner;
