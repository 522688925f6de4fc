//! # emo-feed
//!
//! The orchestration the dashboard performs before shaping: look up the latest
//! inference for each listed document, a bounded number at a time, scoped by
//! an explicit [`SessionContext`](emo_core::session::SessionContext).
//!
//! Transport is not part of this crate. Callers implement [`InferenceLookup`]
//! over their HTTP client; [`MemoryLookup`] serves fixtures.

mod collect;
mod error;
mod lookup;
mod window;

pub use collect::{SampleBatch, collect_samples};
pub use error::FeedError;
pub use lookup::{InferenceLookup, MemoryLookup};
pub use window::TrendWindow;
