//! Backend session configuration.

use emo_core::session::SessionContext;
use serde::{Deserialize, Serialize};

#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Organization sent with every backend request.
    #[serde(default)]
    pub org_id: String,

    /// API key for the backend. Usually supplied through
    /// `EMOTRACE_SESSION__API_KEY` rather than a file.
    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub is_admin: bool,
}

impl SessionConfig {
    /// Check if both an organization and an API key are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.org_id.is_empty() && !self.api_key.is_empty()
    }

    /// Build the explicit context handed to the fetch layer.
    #[must_use]
    pub fn context(&self) -> SessionContext {
        SessionContext {
            org_id: non_empty(&self.org_id),
            api_key: non_empty(&self.api_key),
            is_admin: self.is_admin,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("org_id", &self.org_id)
            .field(
                "api_key",
                &(!self.api_key.is_empty()).then_some("<redacted>"),
            )
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = SessionConfig::default();
        assert!(!config.is_configured());
        let ctx = config.context();
        assert_eq!(ctx.org_id, None);
        assert!(!ctx.has_credentials());
    }

    #[test]
    fn context_carries_org_and_key() {
        let config = SessionConfig {
            org_id: " acme ".into(),
            api_key: "key-123".into(),
            is_admin: true,
        };
        assert!(config.is_configured());
        let ctx = config.context();
        assert_eq!(ctx.org_id.as_deref(), Some("acme"));
        assert_eq!(ctx.api_key.as_deref(), Some("key-123"));
        assert!(ctx.is_admin);
    }

    #[test]
    fn debug_hides_api_key() {
        let config = SessionConfig {
            api_key: "key-123".into(),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("key-123"));
        assert!(rendered.contains("<redacted>"));
    }
}
