//! Cluster data models

use serde::{Deserialize, Serialize};

use crate::ccloud::traits::NamedResource;

/// Cluster durability mode
///
/// The two-valued constraint is enforced by the type; the wire format is
/// `"LOW"` / `"HIGH"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Durability {
    #[default]
    Low,
    High,
}

/// A cluster as declared locally and as returned by the control plane
///
/// `name` is the only mutable field. `environment_id`, `cloud_provider`,
/// `cloud_region`, the quota fields and `durability` can only be set at
/// creation; changing them requires replacing the cluster.
/// `id`, `organization_id` and both endpoints are server-assigned.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Cluster {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "account_id")]
    pub environment_id: String,
    pub name: String,
    #[serde(rename = "service_provider")]
    pub cloud_provider: String,
    #[serde(rename = "region")]
    pub cloud_region: String,
    pub network_ingress: i64,
    pub network_egress: i64,
    pub storage: i64,
    #[serde(default)]
    pub durability: Durability,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub organization_id: i64,
    #[serde(rename = "endpoint", default, skip_serializing_if = "String::is_empty")]
    pub cluster_endpoint: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_endpoint: String,
}

fn is_zero(value: &i64) -> bool {
    *value == 0
}

impl NamedResource for Cluster {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Create request envelope (the control plane keys the new cluster as `config`)
#[derive(Serialize, Debug)]
pub(crate) struct CreateClusterRequest<'a> {
    pub config: &'a Cluster,
}

/// Request envelope for update/delete
#[derive(Serialize, Debug)]
pub(crate) struct ClusterRequestEnvelope<'a> {
    pub cluster: &'a Cluster,
}

/// Response envelope for single-cluster operations
#[derive(Deserialize, Debug)]
pub(crate) struct ClusterEnvelope {
    pub cluster: Cluster,
}

/// Response envelope for cluster listing
#[derive(Deserialize, Debug)]
pub(crate) struct ClustersEnvelope {
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}
