//! Provider/region metadata and the catalog backing cluster validation

use log::debug;
use serde::Deserialize;

use crate::ccloud::{CcloudClient, Session};
use crate::config::api;
use crate::error::Result;

/// A region offered by a cloud provider
#[derive(Deserialize, Debug, Clone)]
pub struct CloudRegion {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A cloud provider and the regions it offers
#[derive(Deserialize, Debug, Clone)]
pub struct CloudProvider {
    pub id: String,
    #[serde(default)]
    pub regions: Vec<CloudRegion>,
}

impl CloudProvider {
    /// Whether the provider offers the given region
    pub fn has_region(&self, region_id: &str) -> bool {
        self.regions.iter().any(|region| region.id == region_id)
    }
}

#[derive(Deserialize, Debug)]
struct EnvironmentMetadataResponse {
    #[serde(rename = "clouds", default)]
    cloud_providers: Vec<CloudProvider>,
}

/// The authoritative provider/region table
///
/// Ships with a built-in default and can be replaced at runtime from the
/// control plane's metadata endpoint, so the table cannot silently go
/// stale against the remote.
#[derive(Debug, Clone)]
pub struct ProviderCatalog {
    providers: Vec<CloudProvider>,
}

impl ProviderCatalog {
    /// Build a catalog from provider metadata
    pub fn from_providers(providers: Vec<CloudProvider>) -> Self {
        Self { providers }
    }

    /// Look up a provider by id
    pub fn provider(&self, id: &str) -> Option<&CloudProvider> {
        self.providers.iter().find(|provider| provider.id == id)
    }

    /// Ids of all known providers
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers
            .iter()
            .map(|provider| provider.id.as_str())
            .collect()
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::from_providers(builtin_providers())
    }
}

fn provider(id: &str, region_ids: &[&str]) -> CloudProvider {
    CloudProvider {
        id: id.to_string(),
        regions: region_ids
            .iter()
            .map(|region_id| CloudRegion {
                id: region_id.to_string(),
                name: region_id.to_string(),
            })
            .collect(),
    }
}

/// Provider table as last published by the control plane.
///
/// Fallback for clients that never call `refresh_provider_catalog`.
fn builtin_providers() -> Vec<CloudProvider> {
    vec![
        provider(
            "aws",
            &[
                "ap-southeast-1",
                "eu-central-1",
                "ap-northeast-1",
                "eu-west-3",
                "eu-west-2",
                "us-west-2",
                "eu-west-1",
                "us-east-1",
                "ca-central-1",
                "us-east-2",
                "ap-southeast-2",
                "ap-south-1",
                "us-west-1",
                "sa-east-1",
            ],
        ),
        provider(
            "gcp",
            &[
                "northamerica-northeast1",
                "southamerica-east1",
                "asia-southeast2",
                "us-west4",
                "asia-southeast1",
                "europe-west3",
                "australia-southeast1",
                "us-central1",
                "us-west1",
                "asia-northeast1",
                "us-west2",
                "europe-north1",
                "europe-west4",
                "us-east4",
                "asia-east2",
                "europe-west1",
                "asia-east1",
                "europe-west2",
                "us-east1",
            ],
        ),
        provider(
            "azure",
            &[
                "australiaeast",
                "francecentral",
                "canadacentral",
                "eastus",
                "uksouth",
                "westus2",
                "westeurope",
                "centralus",
                "eastus2",
                "northeurope",
                "southeastasia",
            ],
        ),
    ]
}

impl CcloudClient {
    /// Fetch the current provider/region metadata
    ///
    /// Returns an empty list when the endpoint reports 404.
    pub async fn environment_metadata(&self, session: &Session) -> Result<Vec<CloudProvider>> {
        let url = format!("{}{}", self.base_url(), api::ENV_METADATA);
        debug!("Fetching provider metadata from: {}", url);

        let response = self.get(&url, Some(session)).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let body: EnvironmentMetadataResponse = response.json().await?;
                Ok(body.cloud_providers)
            }
            404 => Ok(Vec::new()),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Replace the provider catalog with fresh metadata from the control plane
    ///
    /// An empty metadata response leaves the current catalog in place.
    pub async fn refresh_provider_catalog(&mut self, session: &Session) -> Result<()> {
        let providers = self.environment_metadata(session).await?;
        if providers.is_empty() {
            debug!("Provider metadata empty, keeping current catalog");
            return Ok(());
        }
        debug!("Refreshed provider catalog ({} providers)", providers.len());
        self.set_provider_catalog(ProviderCatalog::from_providers(providers));
        Ok(())
    }
}
