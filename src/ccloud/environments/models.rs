//! Environment data models

use serde::{Deserialize, Serialize};

use crate::ccloud::traits::NamedResource;

/// An environment (the control plane calls them accounts)
///
/// `id` and `organization_id` are server-assigned; `name` is the only
/// mutable field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: i64,
}

impl NamedResource for Environment {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Request/response envelope for single-environment operations
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct AccountEnvelope {
    pub account: Environment,
}

/// Response envelope for environment listing
#[derive(Deserialize, Debug)]
pub(crate) struct AccountsEnvelope {
    #[serde(default)]
    pub accounts: Vec<Environment>,
}
