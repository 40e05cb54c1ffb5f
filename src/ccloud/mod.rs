//! Confluent Cloud API client module
//!
//! One submodule per resource type, plus the shared transport, the
//! provider/region catalog and the reconciler adapter that bridges
//! declared configs to resource calls.

pub mod api_keys;
mod client;
pub mod clusters;
pub mod environments;
mod metadata;
mod reconcile;
mod session;
pub mod traits;
pub mod validate;

pub use api_keys::ApiKey;
pub use client::CcloudClient;
pub use clusters::{Cluster, Durability};
pub use environments::Environment;
pub use metadata::{CloudProvider, CloudRegion, ProviderCatalog};
pub use reconcile::{ApiKeyConfig, EnvironmentConfig, Reconciler};
pub use session::{Session, User};
pub use traits::NamedResource;
pub use validate::validate_cluster;

use serde::Deserialize;

/// Error envelope returned by the control plane on non-2xx responses
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Structured error body inside the envelope
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
