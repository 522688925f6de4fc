//! Highlight span merging.
//!
//! Resolves a list of possibly overlapping, unordered, out-of-range
//! [`TextSpan`]s against a text and partitions the text into maximal
//! highlighted/plain [`Segment`]s. Concatenating the segments always yields the
//! input text.
//!
//! Backend offsets can drift from the text they are shown against (redaction
//! changes lengths). [`anchor`] snaps a span back onto its quoted `text` when
//! the offsets no longer point at it. [`merge`] anchors first;
//! [`merge_offsets`] trusts the offsets as given.

use emo_core::entities::{Segment, TextSpan};

/// Merge `spans` over `text` into an ordered, non-overlapping partition,
/// after [`anchor`]ing drifted spans on their quoted text.
///
/// Spans with an empty `text`, or whose offsets already select their `text`,
/// are used exactly as [`merge_offsets`] would use them.
///
/// ```
/// use emo_core::entities::TextSpan;
/// use emo_shape::merge;
///
/// let text = "I am extremely frustrated.";
/// // Offsets three characters late, quote intact.
/// let segments = merge(text, &[TextSpan::new(18, 28, "emotion", "frustrated")]);
/// assert_eq!(segments[1].content, "frustrated");
/// assert!(segments[1].highlighted);
/// ```
#[must_use]
pub fn merge(text: &str, spans: &[TextSpan]) -> Vec<Segment> {
    merge_offsets(text, &anchor(text, spans))
}

/// Merge `spans` over `text` using their offsets as given.
///
/// Offsets are character offsets. Each span is clamped to `[0, len]`; spans
/// that are empty after clamping are ignored. Overlapping or abutting spans
/// collapse into a single highlighted segment, so no character is highlighted
/// twice and the result does not depend on the order of `spans`.
///
/// ```
/// use emo_core::entities::TextSpan;
/// use emo_shape::merge_offsets;
///
/// let segments = merge_offsets("payment failed again", &[TextSpan::new(0, 14, "issue", "")]);
/// assert_eq!(segments.len(), 2);
/// assert!(segments[0].highlighted);
/// assert_eq!(segments[1].content, " again");
/// ```
#[must_use]
pub fn merge_offsets(text: &str, spans: &[TextSpan]) -> Vec<Segment> {
    let bounds = char_boundaries(text);
    let len = bounds.len() - 1;

    let mut ranges: Vec<(usize, usize)> = spans
        .iter()
        .filter_map(|span| {
            let start = clamp_offset(span.start, len);
            let end = clamp_offset(span.end, len);
            (end > start).then_some((start, end))
        })
        .collect();
    // Stable: equal starts keep input order.
    ranges.sort_by_key(|&(start, _)| start);

    let mut runs = Runs::default();
    let mut cursor = 0;
    for (start, end) in ranges {
        if start > cursor {
            runs.push(cursor, start, false);
        }
        if end > cursor {
            runs.push(cursor.max(start), end, true);
            cursor = end;
        }
    }
    if cursor < len {
        runs.push(cursor, len, false);
    }

    tracing::trace!(
        chars = len,
        spans = spans.len(),
        segments = runs.0.len(),
        "merged highlight spans"
    );

    runs.0
        .into_iter()
        .map(|(start, end, highlighted)| Segment {
            content: text[bounds[start]..bounds[end]].to_string(),
            highlighted,
        })
        .collect()
}

/// Re-anchor spans whose offsets no longer point at their quoted `text`.
///
/// A span is kept as-is when its `text` is empty, when its clamped range is
/// empty (such spans highlight nothing and stay that way), when the clamped
/// slice already equals `text`, or when `text` does not occur at all.
/// Otherwise it moves to the occurrence of `text` whose start is nearest the
/// stated start (earlier occurrence on ties). Overlapping occurrences are all
/// candidates. Each span is resolved independently.
#[must_use]
pub fn anchor(text: &str, spans: &[TextSpan]) -> Vec<TextSpan> {
    let bounds = char_boundaries(text);
    let len = bounds.len() - 1;

    spans
        .iter()
        .map(|span| {
            let start = clamp_offset(span.start, len);
            let end = clamp_offset(span.end, len);
            if span.text.is_empty()
                || end <= start
                || text[bounds[start]..bounds[end]] == span.text
            {
                return span.clone();
            }

            let nearest = bounds[..len]
                .iter()
                .enumerate()
                .filter(|&(_, &byte)| text[byte..].starts_with(span.text.as_str()))
                .map(|(candidate, _)| candidate)
                .min_by_key(|&candidate| {
                    i64::try_from(candidate)
                        .unwrap_or(i64::MAX)
                        .abs_diff(span.start)
                });
            let Some(found) = nearest else {
                return span.clone();
            };

            let width = i64::try_from(span.text.chars().count()).unwrap_or(i64::MAX);
            let start = i64::try_from(found).unwrap_or(i64::MAX);
            tracing::debug!(
                label = %span.label,
                from = span.start,
                to = start,
                "re-anchored drifted highlight span"
            );
            TextSpan {
                start,
                end: start.saturating_add(width),
                ..span.clone()
            }
        })
        .collect()
}

/// Character runs `(start, end, highlighted)`, coalescing contiguous runs
/// that share a highlight state.
#[derive(Default)]
struct Runs(Vec<(usize, usize, bool)>);

impl Runs {
    fn push(&mut self, start: usize, end: usize, highlighted: bool) {
        if let Some(last) = self.0.last_mut() {
            if last.2 == highlighted && last.1 == start {
                last.1 = end;
                return;
            }
        }
        self.0.push((start, end, highlighted));
    }
}

/// Byte offset of every character boundary, including `text.len()`.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

fn clamp_offset(offset: i64, len: usize) -> usize {
    usize::try_from(offset.max(0)).map_or(len, |offset| offset.min(len))
}
