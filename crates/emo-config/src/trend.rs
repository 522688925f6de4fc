//! Trend chart configuration.

use emo_core::enums::DayKeyMode;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_sentinel_label() -> String {
    "no_inference".to_string()
}

/// Trailing window shown by the dashboard, in days.
const fn default_window_days() -> u32 {
    14
}

/// Documents requested per trend refresh.
const fn default_document_limit() -> u32 {
    200
}

/// Inference lookups allowed in flight at once.
const fn default_concurrency() -> usize {
    8
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TrendConfig {
    /// Category counted for documents without a completed inference.
    #[serde(default = "default_sentinel_label")]
    pub sentinel_label: String,

    /// How timestamps become day keys (`prefix` or `strict`).
    #[serde(default)]
    pub day_key: DayKeyMode,

    #[serde(default = "default_window_days")]
    pub window_days: u32,

    #[serde(default = "default_document_limit")]
    pub document_limit: u32,

    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            sentinel_label: default_sentinel_label(),
            day_key: DayKeyMode::default(),
            window_days: default_window_days(),
            document_limit: default_document_limit(),
            concurrency: default_concurrency(),
        }
    }
}

impl TrendConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.sentinel_label.trim().is_empty() {
            return Err(ConfigError::invalid(
                "trend.sentinel_label",
                "must not be blank",
            ));
        }
        if self.window_days == 0 {
            return Err(ConfigError::invalid(
                "trend.window_days",
                "must be at least 1",
            ));
        }
        if self.concurrency == 0 {
            return Err(ConfigError::invalid(
                "trend.concurrency",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
