pub mod auth;
pub mod profile;

pub use auth::AuthApiService;
pub use profile::ProfileService;
