use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Explicit per-caller context for the fetch layer.
///
/// Replaces the dashboard's browser-local globals (active organization,
/// stored API key, admin flag). Built once by the caller and passed by
/// reference to every lookup; no lookup reads ambient state.
#[derive(Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionContext {
    /// Active organization. `None` = all organizations visible to the key.
    pub org_id: Option<String>,
    /// API key presented to the backend.
    pub api_key: Option<String>,
    /// Whether the caller holds an admin session.
    #[serde(default)]
    pub is_admin: bool,
}

impl SessionContext {
    /// Context scoped to one organization.
    #[must_use]
    pub fn for_org(org_id: impl Into<String>) -> Self {
        Self {
            org_id: Some(org_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.api_key.is_some() || self.is_admin
    }
}

// Keys must never end up in logs.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("org_id", &self.org_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("is_admin", &self.is_admin)
            .finish()
    }
}
