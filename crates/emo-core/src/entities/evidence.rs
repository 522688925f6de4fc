use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{AlertRecord, TextSpan};

/// A document attached to an alert as supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvidenceRecord {
    pub document_id: String,
    pub external_id: Option<String>,
    /// Ranking weight, `0.0..=1.0` for display.
    pub contribution: f64,
    pub sentiment: Option<String>,
    pub emotion_labels: Option<Vec<String>>,
    pub text_redacted: Option<String>,
    pub keyword_hits: Option<Vec<String>>,
    pub highlights: Option<Vec<TextSpan>>,
    pub calibrated_confidence: Option<f64>,
}

impl EvidenceRecord {
    /// Redacted text, empty when the backend omitted the preview.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text_redacted.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn highlights(&self) -> &[TextSpan] {
        self.highlights.as_deref().unwrap_or_default()
    }

    /// Identifier shown to operators: the source system's id when known.
    #[must_use]
    pub fn document_ref(&self) -> &str {
        self.external_id.as_deref().unwrap_or(&self.document_id)
    }
}

/// Payload of the alert detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AlertDetail {
    pub alert: AlertRecord,
    #[serde(default)]
    pub evidence: Vec<EvidenceRecord>,
}
