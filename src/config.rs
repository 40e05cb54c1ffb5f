/// Configuration constants for the Confluent Cloud API
pub mod api {
    /// Default base URL for the control plane
    pub const BASE_URL: &str = "https://confluent.cloud/api";

    /// Login endpoint
    pub const SESSIONS: &str = "/sessions";

    /// Provider/region metadata endpoint
    pub const ENV_METADATA: &str = "/env_metadata";

    /// Environments endpoint (the control plane calls them accounts)
    pub const ENVIRONMENTS: &str = "/accounts";

    /// Clusters endpoint
    pub const CLUSTERS: &str = "/clusters";

    /// API keys endpoint
    pub const API_KEYS: &str = "/api_keys";

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Quota limits currently enforced by the control plane.
///
/// Each quota admits exactly one value today; these become range bounds
/// once tiered quotas land.
pub mod limits {
    /// Network ingress quota (MB/s)
    pub const NETWORK_INGRESS: i64 = 100;

    /// Network egress quota (MB/s)
    pub const NETWORK_EGRESS: i64 = 100;

    /// Storage quota (GB)
    pub const STORAGE: i64 = 5000;
}
