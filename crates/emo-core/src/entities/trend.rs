use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Emotion-label occurrence counts for one calendar day.
///
/// The sum of `counts` may exceed the number of documents that day: a document
/// with several labels increments each of them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DayBucket {
    /// `YYYY-MM-DD` (or whatever the lenient day key produced).
    pub day: String,
    pub counts: BTreeMap<String, u64>,
}

impl DayBucket {
    #[must_use]
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            counts: BTreeMap::new(),
        }
    }

    /// Count for `label`, zero when absent.
    #[must_use]
    pub fn count(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all label counts in this bucket.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}
