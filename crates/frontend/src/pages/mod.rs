mod auth;
mod home;
mod logout;

pub use auth::AuthPage;
pub use home::HomePage;
pub use logout::LogoutPage;
