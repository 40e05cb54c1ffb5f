//! Environment API operations

use log::debug;

use crate::ccloud::traits::first_by_name;
use crate::ccloud::{CcloudClient, Session};
use crate::config::api;
use crate::error::Result;

use super::models::{AccountEnvelope, AccountsEnvelope, Environment};

impl CcloudClient {
    /// Create a new environment
    ///
    /// Returns the server's canonical object including the assigned id.
    pub async fn create_environment(
        &self,
        session: &Session,
        environment: &Environment,
    ) -> Result<Environment> {
        let url = format!("{}{}", self.base_url(), api::ENVIRONMENTS);
        debug!("Creating environment '{}'", environment.name);

        let request = AccountEnvelope {
            account: environment.clone(),
        };
        let response = self
            .post(&url, Some(session))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let body: AccountEnvelope = response.json().await?;
        debug!("Created environment with id '{}'", body.account.id);
        Ok(body.account)
    }

    /// Read an environment by id
    ///
    /// A 404 means the environment is absent, not an error.
    pub async fn read_environment(
        &self,
        session: &Session,
        id: &str,
    ) -> Result<Option<Environment>> {
        let url = format!("{}{}/{}", self.base_url(), api::ENVIRONMENTS, id);
        debug!("Reading environment '{}'", id);

        let response = self.get(&url, Some(session)).send().await?;

        match response.status().as_u16() {
            200..=299 => {
                let body: AccountEnvelope = response.json().await?;
                Ok(Some(body.account))
            }
            404 => Ok(None),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Update an environment (name is the only mutable field)
    ///
    /// Returns `false` when the environment no longer exists.
    pub async fn update_environment(
        &self,
        session: &Session,
        environment: &Environment,
    ) -> Result<bool> {
        let url = format!(
            "{}{}/{}",
            self.base_url(),
            api::ENVIRONMENTS,
            environment.id
        );
        debug!("Updating environment '{}'", environment.id);

        let request = AccountEnvelope {
            account: environment.clone(),
        };
        let response = self.put(&url, Some(session)).json(&request).send().await?;

        match response.status().as_u16() {
            200..=299 => Ok(true),
            404 => Ok(false),
            _ => Err(self.response_error(response).await),
        }
    }

    /// Delete an environment
    ///
    /// Returns `false` when the environment was already absent.
    pub async fn delete_environment(
        &self,
        session: &Session,
        environment: &Environment,
    ) -> Result<bool> {
        let url = format!(
            "{}{}/{}",
            self.base_url(),
            api::ENVIRONMENTS,
            environment.id
        );
        debug!("Deleting environment '{}'", environment.id);

        let request = AccountEnvelope {
            account: environment.clone(),
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

    /// List all environments visible to the session
    pub async fn list_environments(&self, session: &Session) -> Result<Vec<Environment>> {
        let url = format!("{}{}", self.base_url(), api::ENVIRONMENTS);
        debug!("Listing environments");

        let response = self.get(&url, Some(session)).send().await?;

        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let body: AccountsEnvelope = response.json().await?;
        Ok(body.accounts)
    }

    /// Look up an environment by exact name (first match wins)
    ///
    /// The control plane has no get-by-name endpoint, so this lists and
    /// scans. Duplicate names are not detected.
    pub async fn environment_by_name(
        &self,
        session: &Session,
        name: &str,
    ) -> Result<Option<Environment>> {
        let environments = self.list_environments(session).await?;
        Ok(first_by_name(environments, name))
    }
}
