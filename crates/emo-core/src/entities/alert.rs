use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// An anomaly event raised by the backend rule engine.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AlertRecord {
    pub id: String,
    pub created_at: Option<String>,
    /// Calendar day the alert covers, `YYYY-MM-DD`.
    pub day: String,
    pub alert_type: Option<String>,
    pub severity: Severity,
    pub org_id: Option<String>,
    pub team_id: Option<String>,
    pub channel: Option<String>,
    pub metric: Option<String>,
    pub value: Option<f64>,
    /// Rule-specific baseline statistics (mean, stddev, zscore, ...).
    pub baseline: Option<serde_json::Value>,
    pub message: Option<String>,
}

impl AlertRecord {
    /// One-line summary for feed listings: the message, else `metric: value`.
    #[must_use]
    pub fn headline(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        let metric = self.metric.as_deref().unwrap_or("value");
        match self.value {
            Some(value) => format!("{metric}: {value}"),
            None => format!("{metric}: n/a"),
        }
    }
}

/// Client-side alert filter. Unset or blank fields match everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the alert's org id.
    pub org_substring: Option<String>,
    /// Case-insensitive substring of the alert's team id.
    pub team_substring: Option<String>,
    /// Inclusive lower bound, `YYYY-MM-DD`.
    pub since_day: Option<String>,
    /// Inclusive upper bound, `YYYY-MM-DD`.
    pub until_day: Option<String>,
    pub min_severity: Option<Severity>,
}

impl FilterCriteria {
    #[must_use]
    pub fn org(mut self, substring: impl Into<String>) -> Self {
        self.org_substring = Some(substring.into());
        self
    }

    #[must_use]
    pub fn team(mut self, substring: impl Into<String>) -> Self {
        self.team_substring = Some(substring.into());
        self
    }

    #[must_use]
    pub fn since(mut self, day: impl Into<String>) -> Self {
        self.since_day = Some(day.into());
        self
    }

    #[must_use]
    pub fn until(mut self, day: impl Into<String>) -> Self {
        self.until_day = Some(day.into());
        self
    }

    #[must_use]
    pub const fn at_least(mut self, severity: Severity) -> Self {
        self.min_severity = Some(severity);
        self
    }
}
