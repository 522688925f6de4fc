//! Feed error types.

use thiserror::Error;

/// Errors raised while collecting per-document inference.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A lookup for one document failed.
    #[error("inference lookup for document '{document_id}' failed: {message}")]
    Lookup {
        /// Document whose lookup failed.
        document_id: String,
        /// Transport or decoding error, rendered.
        message: String,
    },

    /// A spawned lookup task could not run to completion.
    #[error("lookup task failed: {0}")]
    Task(String),
}

impl FeedError {
    /// Convenience constructor for [`FeedError::Lookup`].
    pub fn lookup(document_id: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Lookup {
            document_id: document_id.into(),
            message: message.to_string(),
        }
    }
}
