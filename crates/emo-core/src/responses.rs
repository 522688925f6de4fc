//! Display-ready shapes returned by `emo-shape` and printed by the `emo` CLI.
//!
//! These structs define the JSON output of `emo highlight`, `emo trend`,
//! `emo alerts`, and `emo keywords`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AlertRecord, DayBucket, Segment, TextSpan};

/// One evidence document, ready to render inline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvidenceView {
    pub document_ref: String,
    pub contribution: f64,
    pub sentiment: Option<String>,
    pub emotion_labels: Vec<String>,
    pub keyword_hits: Vec<String>,
    pub segments: Vec<Segment>,
}

/// Response from `emo highlight`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AlertDetailView {
    pub alert: AlertRecord,
    pub headline: String,
    pub evidence: Vec<EvidenceView>,
}

/// Dashboard KPI figures derived from the day buckets.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendTotals {
    /// Number of distinct days loaded.
    pub days: u32,
    /// Sum of every label count (emotion occurrences, not documents).
    pub events: u64,
    /// Number of distinct labels, sentinel included.
    pub categories: u32,
}

/// Response from `emo trend`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TrendReport {
    pub buckets: Vec<DayBucket>,
    /// Stacked series order for the chart.
    pub series: Vec<String>,
    pub totals: TrendTotals,
}

/// Response from `emo alerts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AlertFeed {
    pub alerts: Vec<AlertRecord>,
    /// Matches before the display limit was applied.
    pub total_matched: u32,
}

/// Response from `emo keywords`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KeywordMatches {
    /// Lower-cased keywords that matched, first-seen order, no duplicates.
    pub hits: Vec<String>,
    pub highlights: Vec<TextSpan>,
}
