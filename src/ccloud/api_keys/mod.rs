//! API key module - key/secret pairs scoped to an environment+cluster

mod api;
mod models;

pub use models::ApiKey;
