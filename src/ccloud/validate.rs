//! Pre-flight cluster validation
//!
//! Pure functions over one desired cluster and the provider catalog. The
//! resolved provider is carried from the provider check into the region
//! check within the same call, so concurrent validations over a shared
//! client cannot contaminate each other.

use crate::ccloud::clusters::Cluster;
use crate::ccloud::metadata::ProviderCatalog;
use crate::config::limits;
use crate::error::{CcloudError, Result};

/// Validate a desired cluster against the provider catalog and quota limits
///
/// Evaluates provider before region, threading the resolved provider into
/// the region check. Fails with `InvalidConfig` naming the offending field;
/// no network call is made and no state is mutated.
pub fn validate_cluster(cluster: &Cluster, catalog: &ProviderCatalog) -> Result<()> {
    let provider = catalog
        .provider(&cluster.cloud_provider)
        .ok_or_else(|| CcloudError::InvalidConfig {
            field: "cloud_provider",
            reason: format!(
                "'{}' is not a supported provider (valid values are: {})",
                cluster.cloud_provider,
                catalog.provider_ids().join(", ")
            ),
        })?;

    if !provider.has_region(&cluster.cloud_region) {
        let regions: Vec<&str> = provider
            .regions
            .iter()
            .map(|region| region.id.as_str())
            .collect();
        return Err(CcloudError::InvalidConfig {
            field: "cloud_region",
            reason: format!(
                "'{}' is not a region of provider '{}' (valid values are: {})",
                cluster.cloud_region,
                provider.id,
                regions.join(", ")
            ),
        });
    }

    check_fixed_quota(
        "network_ingress",
        cluster.network_ingress,
        limits::NETWORK_INGRESS,
    )?;
    check_fixed_quota(
        "network_egress",
        cluster.network_egress,
        limits::NETWORK_EGRESS,
    )?;
    check_fixed_quota("storage", cluster.storage, limits::STORAGE)?;

    Ok(())
}

/// Check a quota field against its single allowed value
///
/// One predicate per field: when tiered quotas land, this becomes a range
/// check without touching the call sites.
fn check_fixed_quota(field: &'static str, value: i64, allowed: i64) -> Result<()> {
    if value != allowed {
        return Err(CcloudError::InvalidConfig {
            field,
            reason: format!("value needs to be {}", allowed),
        });
    }
    Ok(())
}
