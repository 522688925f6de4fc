//! # emo-shape
//!
//! The data-shaping core behind the emotrace dashboard. Every function here is
//! pure and total: it takes already-fetched backend records and returns plain
//! values for a presentation layer, degrading gracefully on malformed input
//! instead of failing.
//!
//! - [`spans`]: merge highlight spans into highlighted/plain segments
//! - [`trend`]: bucket inference samples into per-day emotion counts
//! - [`alerts`]: client-side alert filtering
//! - [`evidence`]: keyword spans, contribution scores, evidence views

pub mod alerts;
pub mod evidence;
pub mod spans;
pub mod trend;

pub use alerts::{alert_feed, filter};
pub use spans::{anchor, merge, merge_offsets};
pub use trend::{AggregateOptions, SENTINEL_LABEL, aggregate, aggregate_with, build_report};
