//! Bounded fan-out of per-document inference lookups.

use std::sync::Arc;

use emo_core::entities::{DocumentRecord, InferenceRecord, InferenceSample};
use emo_core::session::SessionContext;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::{FeedError, InferenceLookup};

/// Samples for a batch of documents, plus the documents whose lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleBatch {
    /// One sample per input document, in input order.
    pub samples: Vec<InferenceSample>,
    /// Ids of documents whose lookup failed, in input order. Their samples
    /// carry no labels.
    pub failed: Vec<String>,
}

impl SampleBatch {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Look up the latest inference for every document with at most
/// `concurrency` lookups in flight, and pair each document with its result.
///
/// A failed lookup does not fail the batch: the document still yields a
/// sample without labels (so it is counted under the sentinel) and its id is
/// listed in [`SampleBatch::failed`].
pub async fn collect_samples<L: InferenceLookup>(
    lookup: Arc<L>,
    ctx: &SessionContext,
    documents: &[DocumentRecord],
    concurrency: usize,
) -> SampleBatch {
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let ctx = Arc::new(ctx.clone());
    let mut set = JoinSet::new();

    for (idx, document) in documents.iter().enumerate() {
        let lookup = Arc::clone(&lookup);
        let sem = Arc::clone(&semaphore);
        let ctx = Arc::clone(&ctx);
        let document_id = document.id.clone();
        set.spawn(async move {
            let Ok(_permit) = sem.acquire().await else {
                return (idx, Err(FeedError::Task("lookup semaphore closed".into())));
            };
            (idx, lookup.latest_inference(&ctx, &document_id).await)
        });
    }

    // `None` until the lookup for that index succeeds.
    let mut resolved: Vec<Option<Option<InferenceRecord>>> = vec![None; documents.len()];
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((idx, Ok(latest))) => resolved[idx] = Some(latest),
            Ok((idx, Err(error))) => {
                tracing::warn!(
                    document_id = %documents[idx].id,
                    %error,
                    "inference lookup failed; counting document without labels"
                );
            }
            Err(error) => {
                tracing::warn!(%error, "inference lookup task did not complete");
            }
        }
    }

    let mut failed = Vec::new();
    let samples = documents
        .iter()
        .zip(&resolved)
        .map(|(document, latest)| {
            if latest.is_none() {
                failed.push(document.id.clone());
            }
            InferenceSample::from_document(document, latest.as_ref().and_then(Option::as_ref))
        })
        .collect();

    tracing::debug!(
        documents = documents.len(),
        failed = failed.len(),
        "collected inference samples"
    );

    SampleBatch { samples, failed }
}
