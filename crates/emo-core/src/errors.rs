//! Cross-cutting error types for emotrace.
//!
//! The shaping functions in `emo-shape` are total and never return errors.
//! `CoreError` covers parsing of user-supplied values (severity names, day
//! keys) at the edges. Crate-specific errors (`ConfigError`, `FeedError`) live
//! in their own crates and converge in `emo-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any emotrace crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
