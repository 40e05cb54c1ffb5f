//! API key data models

use serde::{Deserialize, Serialize};

/// An API key scoped to an environment+cluster pair
///
/// `secret` is write-once: the control plane returns it only on creation
/// and it is never re-readable. Callers must persist it from the creation
/// snapshot or lose it; subsequent reads populate `key` only.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiKey {
    #[serde(default)]
    pub id: i64,
    pub key: String,
    #[serde(default)]
    pub secret: String,
}

/// Body of API key create/delete requests
#[derive(Serialize, Debug)]
pub(crate) struct ApiKeyRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "account_id")]
    pub environment_id: String,
    pub logical_clusters: Vec<LogicalCluster>,
}

/// Cluster reference inside an API key request
#[derive(Serialize, Debug)]
pub(crate) struct LogicalCluster {
    pub id: String,
}

/// Request envelope for API key create/delete
#[derive(Serialize, Debug)]
pub(crate) struct ApiKeyRequest {
    pub api_key: ApiKeyRequestBody,
}

/// Response envelope for API key creation
#[derive(Deserialize, Debug)]
pub(crate) struct ApiKeyEnvelope {
    pub api_key: ApiKey,
}

/// Response envelope for API key queries
#[derive(Deserialize, Debug)]
pub(crate) struct ApiKeysEnvelope {
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
}
