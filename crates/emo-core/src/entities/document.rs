use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A redacted document as listed by the documents endpoint.
///
/// Timestamps stay as strings so day bucketing sees exactly what the backend
/// sent, malformed values included.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DocumentRecord {
    pub id: String,
    pub external_id: Option<String>,
    pub org_id: Option<String>,
    pub team_id: Option<String>,
    pub source: Option<String>,
    pub channel: Option<String>,
    pub tags: Option<Vec<String>>,
    /// When the underlying event happened, if the source reported it.
    pub timestamp: Option<String>,
    #[serde(default)]
    pub text_redacted: String,
    /// When the backend ingested the document.
    pub created_at: String,
}

impl DocumentRecord {
    /// Event time, falling back to ingestion time.
    #[must_use]
    pub fn effective_timestamp(&self) -> &str {
        self.timestamp.as_deref().unwrap_or(&self.created_at)
    }
}

/// The latest model output for one document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InferenceRecord {
    pub id: String,
    pub inference_run_id: Option<String>,
    pub created_at: Option<String>,
    pub sentiment: Option<String>,
    pub emotion_labels: Option<Vec<String>>,
    pub calibrated_confidence: Option<f64>,
}

/// One document's contribution to the daily emotion chart.
///
/// An empty `emotion_labels` list means "no completed inference"; the
/// aggregator counts such samples under the sentinel label.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InferenceSample {
    pub timestamp: String,
    #[serde(default)]
    pub emotion_labels: Vec<String>,
}

impl InferenceSample {
    #[must_use]
    pub fn new<I, S>(timestamp: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            timestamp: timestamp.into(),
            emotion_labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Pair a document with its latest inference, if any.
    #[must_use]
    pub fn from_document(document: &DocumentRecord, latest: Option<&InferenceRecord>) -> Self {
        Self {
            timestamp: document.effective_timestamp().to_string(),
            emotion_labels: latest
                .and_then(|inference| inference.emotion_labels.clone())
                .unwrap_or_default(),
        }
    }
}
