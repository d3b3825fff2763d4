pub mod app;
pub mod pages;
pub mod wizard;

pub use app::{App, Route};
