//! ccloudsync - Reconciliation client for the Confluent Cloud control plane
//!
//! Maps a locally declared desired state for Confluent Cloud resources
//! (environments, clusters, API keys) onto the control plane REST API and
//! keeps local snapshots synchronized with remote state.
//!
//! # Example
//!
//! ```no_run
//! use ccloudsync::{CcloudClient, Reconciler, EnvironmentConfig};
//!
//! # async fn run() -> ccloudsync::Result<()> {
//! let client = CcloudClient::new();
//! let session = client.login("user@example.com", "secret").await?;
//! let reconciler = Reconciler::new(&client, &session);
//!
//! let desired = EnvironmentConfig { name: "staging".to_string() };
//! let environment = reconciler.apply_environment(&desired, None).await?;
//! println!("environment {} created", environment.id);
//! # Ok(())
//! # }
//! ```

pub mod ccloud;
pub mod config;
pub mod error;

pub use ccloud::{
    validate_cluster, ApiKey, ApiKeyConfig, CcloudClient, CloudProvider, CloudRegion, Cluster,
    Durability, Environment, EnvironmentConfig, NamedResource, ProviderCatalog, Reconciler,
    Session, User,
};
pub use error::{CcloudError, Result};
