//! HTTP client and wire types for the MindWell REST API.

pub mod client;
pub mod types;
