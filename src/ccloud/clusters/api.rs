//! Cluster API operations

use log::debug;

use crate::ccloud::traits::first_by_name;
use crate::ccloud::validate::validate_cluster;
use crate::ccloud::{CcloudClient, Session};
use crate::config::api;
use crate::error::Result;

use super::models::{
    Cluster, ClusterEnvelope, ClusterRequestEnvelope, ClustersEnvelope, CreateClusterRequest,
};

impl CcloudClient {
    /// Create a new cluster
    ///
    /// The desired cluster is validated against the provider catalog before any
    /// network call; validation failures never leave the process.
    /// Returns the server's canonical object including the assigned id
    /// and endpoints.
    pub async fn create_cluster(&self, session: &Session, cluster: &Cluster) -> Result<Cluster> {
        validate_cluster(cluster, self.provider_catalog())?;

        let url = format!("{}{}", self.base_url(), api::CLUSTERS);
        debug!(
            "Creating cluster '{}' in environment '{}'",
            cluster.name, cluster.environment_id
        );

        let request = CreateClusterRequest { config: cluster };
        let response = self
            .post(&url, Some(session))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let body: ClusterEnvelope = response.json().await?;
        debug!("Created cluster with id '{}'", body.cluster.id);
        Ok(body.cluster)
    }

    /// Read a cluster by id within its environment
    ///
    /// A 404 means the cluster is absent, not an error.
    pub async fn read_cluster(
        &self,
        session: &Session,
        id: &str,
        environment_id: &str,
    ) -> Result<Option<Cluster>> {
        let url = format!(
            "{}{}/{}?account_id={}",
            self.base_url(),
            api::CLUSTERS,
            id,
            urlencoding::encode(environment_id)
        );
        debug!("Reading cluster '{}' in environment '{}'", id, environment_id);

        let response = self.get(&url, Some(session)).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let body: ClusterEnvelope = response.json().await?;
                Ok(Some(body.cluster))
            }
            404 => Ok(None),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Update a cluster
    ///
    /// Only `name` is genuinely mutable; immutable fields are resubmitted
    /// unchanged. Returns `false` when the cluster no longer exists.
    pub async fn update_cluster(&self, session: &Session, cluster: &Cluster) -> Result<bool> {
        let url = format!("{}{}/{}", self.base_url(), api::CLUSTERS, cluster.id);
        debug!("Updating cluster '{}'", cluster.id);

        let request = ClusterRequestEnvelope { cluster };
        let response = self.put(&url, Some(session)).json(&request).send().await?;

        match response.status().as_u16() {
            200..=299 => Ok(true),
            404 => Ok(false),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Delete a cluster
    ///
    /// Returns `false` when the cluster was already absent.
    pub async fn delete_cluster(&self, session: &Session, cluster: &Cluster) -> Result<bool> {
        let url = format!("{}{}/{}", self.base_url(), api::CLUSTERS, cluster.id);
        debug!("Deleting cluster '{}'", cluster.id);

        let request = ClusterRequestEnvelope { cluster };
        let response = self
            .delete(&url, Some(session))
            .json(&request)
            .send()
            .await?;

        match response.status().as_u16() {
            200..=299 => Ok(true),
            404 => Ok(false),
            _ => Err(self.response_error(response).await),
        }
    }

    /// List all clusters in an environment
    pub async fn list_clusters(
        &self,
        session: &Session,
        environment_id: &str,
    ) -> Result<Vec<Cluster>> {
        let url = format!(
            "{}{}?account_id={}",
            self.base_url(),
            api::CLUSTERS,
            urlencoding::encode(environment_id)
        );
        debug!("Listing clusters in environment '{}'", environment_id);

        let response = self.get(&url, Some(session)).send().await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let body: ClustersEnvelope = response.json().await?;
        Ok(body.clusters)
    }

    /// Look up a cluster by exact name within an environment (first match wins)
    pub async fn cluster_by_name(
        &self,
        session: &Session,
        environment_id: &str,
        name: &str,
    ) -> Result<Option<Cluster>> {
        let clusters = self.list_clusters(session, environment_id).await?;
        Ok(first_by_name(clusters, name))
    }
}
