//! HTTP transport for the Confluent Cloud control plane

use std::time::Duration;

use reqwest::Client;

use crate::ccloud::metadata::ProviderCatalog;
use crate::ccloud::session::Session;
use crate::ccloud::ErrorEnvelope;
use crate::config::api;
use crate::error::CcloudError;

/// Confluent Cloud API client
///
/// Holds the shared connection pool and the authoritative provider/region
/// catalog used for pre-flight cluster validation. All resource operations
/// are defined in the per-resource `api` modules as methods on this type.
pub struct CcloudClient {
    http: Client,
    /// Custom base URL override (mock servers, non-default control planes)
    base_url_override: Option<String>,
    catalog: ProviderCatalog,
}

impl CcloudClient {
    /// Create a new client with pooled connections and fixed timeouts
    pub fn new() -> Self {
        let http = Client::builder()
            .pool_max_idle_per_host(20)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url_override: None,
            catalog: ProviderCatalog::default(),
        }
    }

    /// Create a client pointed at a custom base URL
    ///
    /// Used for mock servers in tests and for self-hosted control planes.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut client = Self::new();
        client.base_url_override = Some(base_url.to_string());
        client
    }

    /// The provider/region catalog used for cluster validation
    pub fn provider_catalog(&self) -> &ProviderCatalog {
        &self.catalog
    }

    /// Replace the provider catalog
    ///
    /// `refresh_provider_catalog` uses this after fetching the metadata
    /// endpoint; it is also the seam for injecting a custom table.
    pub fn set_provider_catalog(&mut self, catalog: ProviderCatalog) {
        self.catalog = catalog;
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        match &self.base_url_override {
            Some(url) => url.clone(),
            None => api::BASE_URL.to_string(),
        }
    }

    /// Attach standard headers and, when a session is supplied, the auth cookie
    fn with_headers(
        &self,
        builder: reqwest::RequestBuilder,
        session: Option<&Session>,
    ) -> reqwest::RequestBuilder {
        let builder = builder.header("Content-Type", "application/json");
        match session {
            Some(session) => {
                builder.header("Cookie", format!("auth_token={}", session.auth_token()))
            }
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str, session: Option<&Session>) -> reqwest::RequestBuilder {
        self.with_headers(self.http.get(url), session)
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str, session: Option<&Session>) -> reqwest::RequestBuilder {
        self.with_headers(self.http.post(url), session)
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str, session: Option<&Session>) -> reqwest::RequestBuilder {
        self.with_headers(self.http.put(url), session)
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str, session: Option<&Session>) -> reqwest::RequestBuilder {
        self.with_headers(self.http.delete(url), session)
    }

    /// Build an `Api` error from a non-2xx response
    ///
    /// Decodes the control plane's `{error: {code, message}}` envelope and
    /// combines it with the HTTP status line. A missing or malformed
    /// envelope falls back to the bare status line.
    pub(crate) async fn response_error(&self, response: reqwest::Response) -> CcloudError {
        let status = response.status();
        let status_line = match status.canonical_reason() {
            Some(reason) => format!("{} {}", status.as_u16(), reason),
            None => status.as_u16().to_string(),
        };

        let message = match response.json::<ErrorEnvelope>().await {
            Ok(envelope) if !envelope.error.message.is_empty() => {
                format!("{}: {}", status_line, envelope.error.message)
            }
            _ => status_line,
        };

        CcloudError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl Default for CcloudClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl CcloudClient {
    /// Create a test client pointed at a mock server
    pub(crate) fn test_client(base_url: &str) -> Self {
        Self::with_base_url(base_url)
    }
}
