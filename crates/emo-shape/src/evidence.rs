//! Evidence helpers: keyword spans, contribution scores, and render-ready views.

use std::collections::BTreeSet;

use emo_core::entities::{AlertDetail, EvidenceRecord, TextSpan};
use emo_core::responses::{AlertDetailView, EvidenceView, KeywordMatches};
use regex::RegexBuilder;

use crate::spans::merge;

/// Label attached to spans produced by [`find_keyword_spans`].
pub const KEYWORD_LABEL: &str = "keyword";

const SENTIMENT_WEIGHT: f64 = 1.0;
const EMOTION_WEIGHT: f64 = 0.5;
const KEYWORD_WEIGHT: f64 = 0.2;
const CONFIDENCE_FLOOR: f64 = 0.5;

/// Find case-insensitive whole-word occurrences of each keyword.
///
/// Highlights are ordered by keyword, then by position. Offsets are character
/// offsets so they can be fed straight back into [`crate::merge`].
#[must_use]
pub fn find_keyword_spans<S: AsRef<str>>(text: &str, keywords: &[S]) -> KeywordMatches {
    let mut hits: Vec<String> = Vec::new();
    let mut highlights = Vec::new();

    for keyword in keywords.iter().map(AsRef::as_ref) {
        if keyword.is_empty() {
            continue;
        }
        let pattern = format!(r"\b{}\b", regex::escape(keyword));
        let regex = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
            Ok(regex) => regex,
            Err(error) => {
                tracing::warn!(keyword, %error, "skipping keyword that does not compile");
                continue;
            }
        };

        let lowered = keyword.to_lowercase();
        for found in regex.find_iter(text) {
            if !hits.contains(&lowered) {
                hits.push(lowered.clone());
            }
            highlights.push(TextSpan {
                start: char_offset(text, found.start()),
                end: char_offset(text, found.end()),
                label: KEYWORD_LABEL.to_string(),
                text: found.as_str().to_string(),
            });
        }
    }

    KeywordMatches { hits, highlights }
}

fn char_offset(text: &str, byte: usize) -> i64 {
    i64::try_from(text[..byte].chars().count()).unwrap_or(i64::MAX)
}

/// What a contribution score rewards.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionWeights {
    pub target_sentiment: String,
    pub target_emotions: BTreeSet<String>,
    /// Confidence assumed when the inference did not report one.
    pub default_confidence: f64,
}

impl Default for ContributionWeights {
    fn default() -> Self {
        Self {
            target_sentiment: "negative".to_string(),
            target_emotions: BTreeSet::new(),
            default_confidence: 0.5,
        }
    }
}

/// Weighted score used to rank evidence documents for an alert.
///
/// `+1.0` for the target sentiment, `+0.5` per distinct target emotion, `+0.2`
/// per keyword hit, all scaled by `0.5 + confidence`.
#[must_use]
pub fn compute_contribution(
    sentiment: Option<&str>,
    emotion_labels: &[String],
    confidence: Option<f64>,
    keyword_hits: &[String],
    weights: &ContributionWeights,
) -> f64 {
    let mut score = 0.0;
    if sentiment == Some(weights.target_sentiment.as_str()) {
        score += SENTIMENT_WEIGHT;
    }

    let matched_emotions = emotion_labels
        .iter()
        .filter(|label| weights.target_emotions.contains(label.as_str()))
        .collect::<BTreeSet<_>>()
        .len();
    score += EMOTION_WEIGHT * f64::from(u32::try_from(matched_emotions).unwrap_or(u32::MAX));
    score += KEYWORD_WEIGHT * f64::from(u32::try_from(keyword_hits.len()).unwrap_or(u32::MAX));

    score * (CONFIDENCE_FLOOR + confidence.unwrap_or(weights.default_confidence))
}

/// Resolve one evidence record into display segments.
#[must_use]
pub fn evidence_view(evidence: &EvidenceRecord) -> EvidenceView {
    EvidenceView {
        document_ref: evidence.document_ref().to_string(),
        contribution: evidence.contribution,
        sentiment: evidence.sentiment.clone(),
        emotion_labels: evidence.emotion_labels.clone().unwrap_or_default(),
        keyword_hits: evidence.keyword_hits.clone().unwrap_or_default(),
        segments: merge(evidence.text(), evidence.highlights()),
    }
}

/// Resolve an alert detail payload: headline plus every evidence view, in the
/// backend's order.
#[must_use]
pub fn detail_view(detail: &AlertDetail) -> AlertDetailView {
    AlertDetailView {
        alert: detail.alert.clone(),
        headline: detail.alert.headline(),
        evidence: detail.evidence.iter().map(evidence_view).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emo_core::entities::Segment;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_match_whole_words_case_insensitively() {
        let text = "Outage again. Third OUTAGE this week; outages everywhere.";
        let found = find_keyword_spans(text, &["outage"]);
        assert_eq!(found.hits, vec!["outage"]);
        let spans: Vec<_> = found.highlights.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(spans, vec![(0, 6), (20, 26)]);
        assert_eq!(found.highlights[1].text, "OUTAGE");
        assert_eq!(found.highlights[1].label, KEYWORD_LABEL);
    }

    #[test]
    fn hits_are_unique_in_first_seen_order() {
        let text = "Payment failed. I am frustrated, payment failed twice.";
        let found = find_keyword_spans(text, &["Payment Failed", "frustrated", "", "refund"]);
        assert_eq!(found.hits, vec!["payment failed", "frustrated"]);
        assert_eq!(found.highlights.len(), 3);
    }

    #[test]
    fn keyword_offsets_are_characters() {
        let text = "très fâché";
        let found = find_keyword_spans(text, &["fâché"]);
        assert_eq!((found.highlights[0].start, found.highlights[0].end), (5, 10));
        let segments = merge(text, &found.highlights);
        assert_eq!(segments[1], Segment::highlighted("fâché"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let found = find_keyword_spans("price (usd) went up", &["(usd)", "u.d"]);
        // `\b` needs a word character next to the parenthesis.
        assert!(found.hits.is_empty());
        assert!(found.highlights.is_empty());
    }

    #[test]
    fn contribution_combines_signals() {
        let weights = ContributionWeights {
            target_emotions: BTreeSet::from(["anger".to_string()]),
            ..ContributionWeights::default()
        };
        let score = compute_contribution(
            Some("negative"),
            &["anger".into(), "anger".into(), "joy".into()],
            Some(0.5),
            &["outage".into(), "refund".into()],
            &weights,
        );
        // (1.0 + 0.5 + 0.4) * 1.0
        assert!((score - 1.9).abs() < 1e-9);
    }

    #[test]
    fn contribution_defaults_missing_confidence() {
        let weights = ContributionWeights::default();
        let score = compute_contribution(Some("negative"), &[], None, &[], &weights);
        assert!((score - 1.0).abs() < 1e-9);
        let none = compute_contribution(Some("positive"), &[], Some(0.9), &[], &weights);
        assert!(none.abs() < 1e-9);
    }

    #[test]
    fn evidence_view_prefers_external_id() {
        let evidence = EvidenceRecord {
            document_id: "doc-102".into(),
            external_id: Some("TKT-9930".into()),
            contribution: 0.77,
            sentiment: Some("negative".into()),
            emotion_labels: Some(vec!["anger".into()]),
            text_redacted: Some("I am angry and considering canceling.".into()),
            keyword_hits: None,
            highlights: Some(vec![TextSpan::new(5, 10, "emotion", "angry")]),
            calibrated_confidence: None,
        };
        let view = evidence_view(&evidence);
        assert_eq!(view.document_ref, "TKT-9930");
        assert!(view.keyword_hits.is_empty());
        assert_eq!(
            view.segments,
            vec![
                Segment::plain("I am "),
                Segment::highlighted("angry"),
                Segment::plain(" and considering canceling."),
            ]
        );
    }
}
