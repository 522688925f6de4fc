//! Evidence scoring configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_target_sentiment() -> String {
    "negative".to_string()
}

/// Confidence assumed when an inference did not report one.
const fn default_confidence() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvidenceConfig {
    /// Sentiment that earns the full sentiment weight.
    #[serde(default = "default_target_sentiment")]
    pub target_sentiment: String,

    /// Emotion labels the alert rule is watching (e.g. `["anger"]`).
    #[serde(default)]
    pub target_emotions: Vec<String>,

    #[serde(default = "default_confidence")]
    pub default_confidence: f64,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            target_sentiment: default_target_sentiment(),
            target_emotions: Vec::new(),
            default_confidence: default_confidence(),
        }
    }
}

impl EvidenceConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.default_confidence) {
            return Err(ConfigError::invalid(
                "evidence.default_confidence",
                format!("{} is outside 0.0..=1.0", self.default_confidence),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = EvidenceConfig::default();
        assert_eq!(config.target_sentiment, "negative");
        assert!(config.target_emotions.is_empty());
        assert!((config.default_confidence - 0.5).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn confidence_out_of_range_is_rejected() {
        let config = EvidenceConfig {
            default_confidence: 1.5,
            ..Default::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.to_string().contains("evidence.default_confidence"));
    }
}
