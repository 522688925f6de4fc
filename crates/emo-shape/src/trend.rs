//! Daily emotion aggregation for the dashboard's stacked trend chart.
//!
//! Samples are grouped by calendar day and every emotion label occurrence is
//! counted. Documents without a completed inference are counted under a
//! sentinel label so they still show up as volume.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use emo_core::entities::{DayBucket, InferenceSample};
use emo_core::enums::DayKeyMode;
use emo_core::responses::{TrendReport, TrendTotals};

/// Label counted for samples that carry no emotion labels.
pub const SENTINEL_LABEL: &str = "no_inference";

/// Length of a `YYYY-MM-DD` day key.
const DAY_KEY_LEN: usize = 10;

/// Tuning for [`aggregate_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateOptions {
    pub sentinel_label: String,
    pub day_key: DayKeyMode,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            sentinel_label: SENTINEL_LABEL.to_string(),
            day_key: DayKeyMode::Prefix,
        }
    }
}

/// Bucket samples by day using the default options (prefix day keys,
/// `no_inference` sentinel).
#[must_use]
pub fn aggregate(samples: &[InferenceSample]) -> Vec<DayBucket> {
    aggregate_with(samples, &AggregateOptions::default())
}

/// Bucket samples by day, ascending by day key.
///
/// A sample with labels increments each of its labels once per occurrence; a
/// sample without labels increments `options.sentinel_label`. The total of all
/// counts therefore equals the sum over samples of `max(1, labels.len())`.
#[must_use]
pub fn aggregate_with(samples: &[InferenceSample], options: &AggregateOptions) -> Vec<DayBucket> {
    let mut by_day: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();

    for sample in samples {
        let counts = by_day
            .entry(day_key(&sample.timestamp, options.day_key))
            .or_default();

        if sample.emotion_labels.is_empty() {
            *counts.entry(options.sentinel_label.clone()).or_insert(0) += 1;
        } else {
            for label in &sample.emotion_labels {
                *counts.entry(label.clone()).or_insert(0) += 1;
            }
        }
    }

    by_day
        .into_iter()
        .map(|(day, counts)| DayBucket { day, counts })
        .collect()
}

/// Derive the bucket key for a timestamp.
///
/// `Prefix` takes the first ten characters and never fails, so malformed
/// timestamps still land in some (possibly odd) bucket. `Strict` parses the
/// timestamp and normalises offsets to UTC, falling back to the prefix when
/// parsing fails.
#[must_use]
pub fn day_key(timestamp: &str, mode: DayKeyMode) -> String {
    match mode {
        DayKeyMode::Prefix => prefix_day_key(timestamp).to_string(),
        DayKeyMode::Strict => strict_day_key(timestamp).unwrap_or_else(|| {
            tracing::warn!(timestamp, "unparseable timestamp; using its first 10 characters");
            prefix_day_key(timestamp).to_string()
        }),
    }
}

fn prefix_day_key(timestamp: &str) -> &str {
    timestamp
        .char_indices()
        .nth(DAY_KEY_LEN)
        .map_or(timestamp, |(byte, _)| &timestamp[..byte])
}

fn strict_day_key(timestamp: &str) -> Option<String> {
    let trimmed = timestamp.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc).date_naive().to_string());
    }
    // Offset-less datetimes are taken to be UTC already.
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed.date().to_string());
    }
    NaiveDate::parse_from_str(trimmed.get(..DAY_KEY_LEN)?, "%Y-%m-%d")
        .ok()
        .map(|date| date.to_string())
}

/// KPI figures: loaded days, total label occurrences, distinct labels.
#[must_use]
pub fn totals(buckets: &[DayBucket]) -> TrendTotals {
    let categories: BTreeSet<&str> = buckets
        .iter()
        .flat_map(|bucket| bucket.counts.keys().map(String::as_str))
        .collect();

    TrendTotals {
        days: u32::try_from(buckets.len()).unwrap_or(u32::MAX),
        events: buckets.iter().map(DayBucket::total).sum(),
        categories: u32::try_from(categories.len()).unwrap_or(u32::MAX),
    }
}

/// Distinct labels in chart series order: by the first bucket a label appears
/// in, alphabetical within a bucket.
#[must_use]
pub fn series_labels(buckets: &[DayBucket]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut series = Vec::new();
    for bucket in buckets {
        for label in bucket.counts.keys() {
            if seen.insert(label.as_str()) {
                series.push(label.clone());
            }
        }
    }
    series
}

/// One zero-filled row per bucket, one column per entry of `series`.
#[must_use]
pub fn dense_rows(buckets: &[DayBucket], series: &[String]) -> Vec<Vec<u64>> {
    buckets
        .iter()
        .map(|bucket| series.iter().map(|label| bucket.count(label)).collect())
        .collect()
}

/// Aggregate samples and derive series order and totals in one pass.
#[must_use]
pub fn build_report(samples: &[InferenceSample], options: &AggregateOptions) -> TrendReport {
    let buckets = aggregate_with(samples, options);
    let series = series_labels(&buckets);
    let totals = totals(&buckets);

    tracing::debug!(
        samples = samples.len(),
        days = totals.days,
        events = totals.events,
        categories = totals.categories,
        "aggregated emotion trend"
    );

    TrendReport {
        buckets,
        series,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample(ts: &str, labels: &[&str]) -> InferenceSample {
        InferenceSample::new(ts, labels.iter().copied())
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(aggregate(&[]).is_empty());
        assert_eq!(totals(&[]), TrendTotals::default());
    }

    #[test]
    fn missing_labels_count_as_sentinel() {
        let buckets = aggregate(&[
            sample("2026-02-10T09:00:00Z", &["anger"]),
            sample("2026-02-10T10:00:00Z", &[]),
        ]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].day, "2026-02-10");
        assert_eq!(buckets[0].count("anger"), 1);
        assert_eq!(buckets[0].count(SENTINEL_LABEL), 1);
    }

    #[test]
    fn every_label_occurrence_is_counted() {
        let buckets = aggregate(&[
            sample("2026-02-10T09:00:00Z", &["anger", "sadness"]),
            sample("2026-02-10T11:00:00Z", &["anger"]),
        ]);
        assert_eq!(buckets[0].count("anger"), 2);
        assert_eq!(buckets[0].count("sadness"), 1);
        assert_eq!(buckets[0].total(), 3);
    }

    #[test]
    fn buckets_are_sorted_by_day() {
        let buckets = aggregate(&[
            sample("2026-02-12T00:00:00Z", &["joy"]),
            sample("2026-02-01T00:00:00Z", &["joy"]),
            sample("2026-02-10T00:00:00Z", &["joy"]),
        ]);
        let days: Vec<_> = buckets.iter().map(|b| b.day.as_str()).collect();
        assert_eq!(days, vec!["2026-02-01", "2026-02-10", "2026-02-12"]);
    }

    #[test]
    fn custom_sentinel_label() {
        let options = AggregateOptions {
            sentinel_label: "pending".into(),
            ..AggregateOptions::default()
        };
        let buckets = aggregate_with(&[sample("2026-02-10", &[])], &options);
        assert_eq!(buckets[0].count("pending"), 1);
        assert_eq!(buckets[0].count(SENTINEL_LABEL), 0);
    }

    #[rstest]
    #[case::iso_utc("2026-02-10T09:00:00Z", "2026-02-10")]
    #[case::bare_date("2026-02-10", "2026-02-10")]
    #[case::short("2026-02", "2026-02")]
    #[case::empty("", "")]
    #[case::garbage("yesterday afternoon", "yesterday ")]
    #[case::offset_ignored("2026-02-10T23:30:00-05:00", "2026-02-10")]
    fn prefix_day_keys(#[case] timestamp: &str, #[case] expected: &str) {
        assert_eq!(day_key(timestamp, DayKeyMode::Prefix), expected);
    }

    #[rstest]
    #[case::iso_utc("2026-02-10T09:00:00Z", "2026-02-10")]
    #[case::offset_normalised("2026-02-10T23:30:00-05:00", "2026-02-11")]
    #[case::space_separator("2026-02-10 09:00:00+00:00", "2026-02-10")]
    #[case::naive("2026-02-10T09:00:00.123456", "2026-02-10")]
    #[case::bare_date("2026-02-10", "2026-02-10")]
    #[case::fallback("yesterday afternoon", "yesterday ")]
    fn strict_day_keys(#[case] timestamp: &str, #[case] expected: &str) {
        assert_eq!(day_key(timestamp, DayKeyMode::Strict), expected);
    }

    #[test]
    fn series_follow_first_appearance() {
        let buckets = aggregate(&[
            sample("2026-02-11", &["anger", "joy"]),
            sample("2026-02-10", &["sadness"]),
            sample("2026-02-12", &["anxiety", "joy"]),
        ]);
        assert_eq!(
            series_labels(&buckets),
            vec!["sadness", "anger", "joy", "anxiety"]
        );
    }

    #[test]
    fn dense_rows_fill_zeroes() {
        let buckets = aggregate(&[sample("2026-02-10", &["anger"]), sample("2026-02-11", &[])]);
        let series = series_labels(&buckets);
        assert_eq!(series, vec!["anger", SENTINEL_LABEL]);
        assert_eq!(dense_rows(&buckets, &series), vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn report_totals() {
        let report = build_report(
            &[
                sample("2026-02-10", &["anger", "sadness"]),
                sample("2026-02-11", &[]),
            ],
            &AggregateOptions::default(),
        );
        assert_eq!(
            report.totals,
            TrendTotals {
                days: 2,
                events: 3,
                categories: 3,
            }
        );
        assert_eq!(report.series.len(), 3);
    }
}
