//! Alert feed configuration.

use serde::{Deserialize, Serialize};

/// Alerts shown when no `--limit` is given.
const fn default_limit() -> u32 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AlertsConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Lowest severity listed by default (`low`, `medium`, `high`). Empty
    /// lists everything.
    #[serde(default)]
    pub min_severity: String,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_severity: String::new(),
        }
    }
}
