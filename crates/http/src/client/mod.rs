//! REST clients for the MindWell API.

pub mod error;
mod typed;

pub use error::ClientError;
pub use typed::{AuthenticatedClient, PublicClient, TypedClientBuilder};
