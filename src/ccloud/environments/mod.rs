//! Environment module - top-level namespaces grouping clusters

mod api;
mod models;

pub use models::Environment;
