//! Reconciler adapter
//!
//! Bridges "apply this declared config" / "refresh state" calls from an
//! external orchestrator onto the resource clients. Each resource exposes
//! apply, refresh and destroy; the orchestrator owns persistence, diffing
//! across runs and any retry policy.

use log::debug;

use crate::ccloud::api_keys::ApiKey;
use crate::ccloud::clusters::Cluster;
use crate::ccloud::environments::Environment;
use crate::ccloud::{CcloudClient, Session};
use crate::error::{CcloudError, Result};

/// Declared state for an environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub name: String,
}

/// Declared scoping pair for an API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    pub environment_id: String,
    pub cluster_id: String,
}

/// Per-resource apply/refresh/destroy over one client and session
pub struct Reconciler<'a> {
    client: &'a CcloudClient,
    session: &'a Session,
}

impl<'a> Reconciler<'a> {
    pub fn new(client: &'a CcloudClient, session: &'a Session) -> Self {
        Self { client, session }
    }

    /// Apply a declared environment
    ///
    /// No known remote state means first apply: create, defaulting the
    /// owning organization from the session identity. With known state,
    /// update when the name differs, then read back to refresh the
    /// snapshot. A read-back miss means the environment vanished
    /// mid-apply and is reported as a 404-status error.
    pub async fn apply_environment(
        &self,
        desired: &EnvironmentConfig,
        known: Option<&Environment>,
    ) -> Result<Environment> {
        let known = match known {
            Some(known) => known,
            None => {
                let environment = Environment {
                    id: String::new(),
                    name: desired.name.clone(),
                    organization_id: self.session.organization_id(),
                };
                return self.client.create_environment(self.session, &environment).await;
            }
        };

        if desired.name != known.name {
            let updated = Environment {
                id: known.id.clone(),
                name: desired.name.clone(),
                organization_id: known.organization_id,
            };
            if !self.client.update_environment(self.session, &updated).await? {
                return Err(vanished("environment", &known.id));
            }
        }

        match self.client.read_environment(self.session, &known.id).await? {
            Some(environment) => Ok(environment),
            None => Err(vanished("environment", &known.id)),
        }
    }

    /// Read an environment without applying; absent means the entity no
    /// longer exists and the orchestrator decides recreate-vs-drop.
    pub async fn refresh_environment(&self, id: &str) -> Result<Option<Environment>> {
        self.client.read_environment(self.session, id).await
    }

    /// Destroy an environment; an already-absent remote is success.
    pub async fn destroy_environment(&self, environment: &Environment) -> Result<()> {
        if !self
            .client
            .delete_environment(self.session, environment)
            .await?
        {
            debug!("Environment '{}' already absent", environment.id);
        }
        Ok(())
    }

    /// Apply a declared cluster
    ///
    /// With known remote state, any difference in an immutable field is a
    /// contract violation reported as `ImmutableField` before any network
    /// call; the orchestrator decides whether to destroy and recreate. A
    /// name-only difference becomes an update with the immutable values
    /// resubmitted unchanged, followed by a read-back. First apply
    /// validates and creates.
    pub async fn apply_cluster(
        &self,
        desired: &Cluster,
        known: Option<&Cluster>,
    ) -> Result<Cluster> {
        let known = match known {
            Some(known) => known,
            None => return self.client.create_cluster(self.session, desired).await,
        };

        if let Some(field) = changed_immutable_field(desired, known) {
            return Err(CcloudError::ImmutableField { field });
        }

        if desired.name != known.name {
            let mut updated = known.clone();
            updated.name = desired.name.clone();
            if !self.client.update_cluster(self.session, &updated).await? {
                return Err(vanished("cluster", &known.id));
            }
        }

        match self
            .client
            .read_cluster(self.session, &known.id, &known.environment_id)
            .await?
        {
            Some(cluster) => Ok(cluster),
            None => Err(vanished("cluster", &known.id)),
        }
    }

    /// Read a cluster without applying
    pub async fn refresh_cluster(
        &self,
        id: &str,
        environment_id: &str,
    ) -> Result<Option<Cluster>> {
        self.client.read_cluster(self.session, id, environment_id).await
    }

    /// Destroy a cluster; an already-absent remote is success.
    pub async fn destroy_cluster(&self, cluster: &Cluster) -> Result<()> {
        if !self.client.delete_cluster(self.session, cluster).await? {
            debug!("Cluster '{}' already absent", cluster.id);
        }
        Ok(())
    }

    /// Apply a declared API key
    ///
    /// API keys have no mutable fields. A known key that is still
    /// readable is returned as-is (the secret is write-once and not
    /// repopulated); a known key that vanished remotely is eligible for
    /// re-creation, so a fresh key is minted.
    pub async fn apply_api_key(
        &self,
        config: &ApiKeyConfig,
        known: Option<&ApiKey>,
    ) -> Result<ApiKey> {
        if let Some(known) = known {
            if let Some(existing) = self
                .client
                .read_api_key(
                    self.session,
                    &config.environment_id,
                    &config.cluster_id,
                    &known.key,
                )
                .await?
            {
                return Ok(existing);
            }
            debug!(
                "API key '{}' vanished remotely, creating a replacement",
                known.key
            );
        }

        self.client
            .create_api_key(self.session, &config.environment_id, &config.cluster_id)
            .await
    }

    /// Read an API key without applying
    pub async fn refresh_api_key(
        &self,
        config: &ApiKeyConfig,
        key: &str,
    ) -> Result<Option<ApiKey>> {
        self.client
            .read_api_key(self.session, &config.environment_id, &config.cluster_id, key)
            .await
    }

    /// Destroy an API key; an already-absent remote is success.
    pub async fn destroy_api_key(&self, config: &ApiKeyConfig, id: i64) -> Result<()> {
        if !self
            .client
            .delete_api_key(self.session, &config.environment_id, &config.cluster_id, id)
            .await?
        {
            debug!("API key {} already absent", id);
        }
        Ok(())
    }
}

/// The first immutable cluster field whose desired value differs from the
/// known remote value, if any.
fn changed_immutable_field(desired: &Cluster, known: &Cluster) -> Option<&'static str> {
    if desired.environment_id != known.environment_id {
        return Some("environment_id");
    }
    if desired.cloud_provider != known.cloud_provider {
        return Some("cloud_provider");
    }
    if desired.cloud_region != known.cloud_region {
        return Some("cloud_region");
    }
    if desired.network_ingress != known.network_ingress {
        return Some("network_ingress");
    }
    if desired.network_egress != known.network_egress {
        return Some("network_egress");
    }
    if desired.storage != known.storage {
        return Some("storage");
    }
    if desired.durability != known.durability {
        return Some("durability");
    }
    None
}

/// Build the error reported when an entity disappears between an update
/// and its read-back.
fn vanished(kind: &str, id: &str) -> CcloudError {
    CcloudError::Api {
        status: 404,
        message: format!("{} '{}' no longer exists", kind, id),
    }
}
