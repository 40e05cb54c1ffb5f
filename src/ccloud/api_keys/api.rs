//! API key operations

use log::debug;

use crate::ccloud::{CcloudClient, Session};
use crate::config::api;
use crate::error::Result;

use super::models::{
    ApiKey, ApiKeyEnvelope, ApiKeyRequest, ApiKeyRequestBody, ApiKeysEnvelope, LogicalCluster,
};

impl CcloudClient {
    /// Create a new API key for an environment+cluster pair
    ///
    /// The returned snapshot is the only place the secret is ever
    /// populated; persist it immediately.
    pub async fn create_api_key(
        &self,
        session: &Session,
        environment_id: &str,
        cluster_id: &str,
    ) -> Result<ApiKey> {
        let url = format!("{}{}", self.base_url(), api::API_KEYS);
        debug!(
            "Creating API key for cluster '{}' in environment '{}'",
            cluster_id, environment_id
        );

        let request = ApiKeyRequest {
            api_key: ApiKeyRequestBody {
                id: None,
                environment_id: environment_id.to_string(),
                logical_clusters: vec![LogicalCluster {
                    id: cluster_id.to_string(),
                }],
            },
        };
        let response = self
            .post(&url, Some(session))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let body: ApiKeyEnvelope = response.json().await?;
        debug!("Created API key '{}'", body.api_key.key);
        Ok(body.api_key)
    }

    /// Read an API key by its full scoping triple
    ///
    /// The control plane has no single-key lookup, so the query carries
    /// environment, cluster and key; the first match is returned. The
    /// secret is never included in read responses.
    pub async fn read_api_key(
        &self,
        session: &Session,
        environment_id: &str,
        cluster_id: &str,
        key: &str,
    ) -> Result<Option<ApiKey>> {
        let url = format!(
            "{}{}?account_id={}&cluster_id={}&key={}",
            self.base_url(),
            api::API_KEYS,
            urlencoding::encode(environment_id),
            urlencoding::encode(cluster_id),
            urlencoding::encode(key)
        );
        debug!(
            "Reading API key '{}' for cluster '{}' in environment '{}'",
            key, cluster_id, environment_id
        );

        let response = self.get(&url, Some(session)).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let body: ApiKeysEnvelope = response.json().await?;
                Ok(body.api_keys.into_iter().next())
            }
            404 => Ok(None),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Delete an API key
    ///
    /// The scoping pair is resubmitted in the body as the control plane
    /// requires. Returns `false` when the key was already absent.
    pub async fn delete_api_key(
        &self,
        session: &Session,
        environment_id: &str,
        cluster_id: &str,
        id: i64,
    ) -> Result<bool> {
        let url = format!("{}{}/{}", self.base_url(), api::API_KEYS, id);
        debug!("Deleting API key {}", id);

        let request = ApiKeyRequest {
            api_key: ApiKeyRequestBody {
                id: Some(id),
                environment_id: environment_id.to_string(),
                logical_clusters: vec![LogicalCluster {
                    id: cluster_id.to_string(),
                }],
            },
        };
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
}
