//! The seam between the shaping core and whatever fetches inference.

use std::collections::HashMap;
use std::future::Future;

use emo_core::entities::InferenceRecord;
use emo_core::session::SessionContext;

use crate::FeedError;

/// Fetch the latest inference for one document.
///
/// Implementors own the transport (HTTP client, cache, fixture file). `Ok(None)`
/// means the backend has no completed inference for the document yet.
pub trait InferenceLookup: Send + Sync + 'static {
    fn latest_inference(
        &self,
        ctx: &SessionContext,
        document_id: &str,
    ) -> impl Future<Output = Result<Option<InferenceRecord>, FeedError>> + Send;
}

/// Lookup backed by an in-memory map, e.g. a fixture decoded from JSON.
///
/// Documents missing from the map have no inference.
#[derive(Debug, Clone, Default)]
pub struct MemoryLookup {
    records: HashMap<String, Option<InferenceRecord>>,
}

impl MemoryLookup {
    #[must_use]
    pub const fn new(records: HashMap<String, Option<InferenceRecord>>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, Option<InferenceRecord>)> for MemoryLookup {
    fn from_iter<T: IntoIterator<Item = (String, Option<InferenceRecord>)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl InferenceLookup for MemoryLookup {
    async fn latest_inference(
        &self,
        _ctx: &SessionContext,
        document_id: &str,
    ) -> Result<Option<InferenceRecord>, FeedError> {
        Ok(self.records.get(document_id).cloned().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, labels: &[&str]) -> InferenceRecord {
        InferenceRecord {
            id: id.into(),
            inference_run_id: None,
            created_at: None,
            sentiment: None,
            emotion_labels: Some(labels.iter().map(ToString::to_string).collect()),
            calibrated_confidence: None,
        }
    }

    #[tokio::test]
    async fn memory_lookup_resolves_known_documents() {
        let lookup: MemoryLookup = [
            ("d1".to_string(), Some(record("i1", &["anger"]))),
            ("d2".to_string(), None),
        ]
        .into_iter()
        .collect();
        let ctx = SessionContext::default();

        assert_eq!(lookup.len(), 2);
        let found = lookup.latest_inference(&ctx, "d1").await.unwrap();
        assert_eq!(found.map(|r| r.id), Some("i1".to_string()));
        assert!(lookup.latest_inference(&ctx, "d2").await.unwrap().is_none());
        assert!(lookup.latest_inference(&ctx, "missing").await.unwrap().is_none());
    }
}
