//! Login and session handling

use log::debug;
use serde::{Deserialize, Serialize};

use crate::ccloud::CcloudClient;
use crate::config::api;
use crate::error::{CcloudError, Result};

/// Authenticated user identity returned by the login endpoint
#[derive(Deserialize, Debug, Clone, Default)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub organization_id: i64,
}

/// Authenticated session: token plus the identity it belongs to
///
/// Created once by [`CcloudClient::login`] and immutable afterwards. The
/// token is attached to every authenticated call as an auth cookie. The
/// session is never persisted by this crate.
#[derive(Debug, Clone)]
pub struct Session {
    auth_token: String,
    pub user: User,
}

impl Session {
    pub(crate) fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// Organization the authenticated user belongs to
    ///
    /// Used to default the owning organization of a new environment.
    pub fn organization_id(&self) -> i64 {
        self.user.organization_id
    }
}

#[derive(Serialize, Debug)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize, Debug)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    user: User,
}

impl CcloudClient {
    /// Exchange credentials for a session
    ///
    /// Any transport failure or non-2xx response is an authentication
    /// failure; no retry is attempted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}{}", self.base_url(), api::SESSIONS);
        debug!("Logging in as {}", email);

        let request = LoginRequest { email, password };
        let response = self
            .post(&url, None)
            .json(&request)
            .send()
            .await
            .map_err(|e| CcloudError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            let message = match self.response_error(response).await {
                CcloudError::Api { message, .. } => message,
                other => other.to_string(),
            };
            return Err(CcloudError::Auth(message));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| CcloudError::Auth(format!("malformed login response: {}", e)))?;

        debug!(
            "Logged in as {} (organization {})",
            body.user.email, body.user.organization_id
        );
        Ok(Session {
            auth_token: body.token,
            user: body.user,
        })
    }
}

#[cfg(test)]
impl Session {
    /// Create a session without going through login
    pub(crate) fn test_session() -> Self {
        Session {
            auth_token: "test-token".to_string(),
            user: User {
                id: 42,
                email: "tester@example.com".to_string(),
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                organization_id: 1234,
            },
        }
    }
}
