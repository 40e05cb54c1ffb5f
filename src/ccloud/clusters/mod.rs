//! Cluster module - provisioned data-plane units bound to a provider/region

mod api;
mod models;

pub use models::{Cluster, Durability};
