//! Client-side alert filtering.
//!
//! Org/team criteria are case-insensitive substrings, day bounds are inclusive
//! and compared as `YYYY-MM-DD` strings. Blank criteria match everything.

use emo_core::entities::{AlertRecord, FilterCriteria};
use emo_core::responses::AlertFeed;

/// Keep the alerts matching every criterion, preserving input order.
#[must_use]
pub fn filter(alerts: &[AlertRecord], criteria: &FilterCriteria) -> Vec<AlertRecord> {
    let matcher = Matcher::new(criteria);
    alerts
        .iter()
        .filter(|alert| matcher.matches(alert))
        .cloned()
        .collect()
}

/// Filter, then cap the list at `limit` while reporting how many matched.
#[must_use]
pub fn alert_feed(
    alerts: &[AlertRecord],
    criteria: &FilterCriteria,
    limit: Option<usize>,
) -> AlertFeed {
    let mut matched = filter(alerts, criteria);
    let total_matched = u32::try_from(matched.len()).unwrap_or(u32::MAX);
    if let Some(limit) = limit {
        matched.truncate(limit);
    }

    tracing::debug!(
        input = alerts.len(),
        matched = total_matched,
        shown = matched.len(),
        "filtered alert feed"
    );

    AlertFeed {
        alerts: matched,
        total_matched,
    }
}

/// Criteria normalised once per filter call.
struct Matcher<'a> {
    org: String,
    team: String,
    since: Option<&'a str>,
    until: Option<&'a str>,
    criteria: &'a FilterCriteria,
}

impl<'a> Matcher<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            org: normalise(criteria.org_substring.as_deref()),
            team: normalise(criteria.team_substring.as_deref()),
            since: non_blank(criteria.since_day.as_deref()),
            until: non_blank(criteria.until_day.as_deref()),
            criteria,
        }
    }

    fn matches(&self, alert: &AlertRecord) -> bool {
        contains_lowercase(alert.org_id.as_deref(), &self.org)
            && contains_lowercase(alert.team_id.as_deref(), &self.team)
            && self.since.is_none_or(|since| alert.day.as_str() >= since)
            && self.until.is_none_or(|until| alert.day.as_str() <= until)
            && self
                .criteria
                .min_severity
                .is_none_or(|min| alert.severity >= min)
    }
}

fn normalise(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Missing ids are treated as empty, so they only match an empty needle.
fn contains_lowercase(haystack: Option<&str>, needle: &str) -> bool {
    needle.is_empty() || haystack.unwrap_or_default().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emo_core::enums::Severity;
    use pretty_assertions::assert_eq;

    fn alert(id: &str, org: Option<&str>, team: Option<&str>, day: &str) -> AlertRecord {
        AlertRecord {
            id: id.into(),
            created_at: None,
            day: day.into(),
            alert_type: None,
            severity: Severity::Medium,
            org_id: org.map(String::from),
            team_id: team.map(String::from),
            channel: None,
            metric: None,
            value: None,
            baseline: None,
            message: None,
        }
    }

    fn ids(alerts: &[AlertRecord]) -> Vec<&str> {
        alerts.iter().map(|a| a.id.as_str()).collect()
    }

    fn fixture() -> Vec<AlertRecord> {
        vec![
            alert("a1", Some("ACME-Support"), Some("payments"), "2026-02-10"),
            alert("a2", Some("beta"), None, "2026-02-20"),
            alert("a3", None, Some("Support"), "2026-02-01"),
        ]
    }

    #[test]
    fn org_match_is_trimmed_and_case_insensitive() {
        let out = filter(&fixture(), &FilterCriteria::default().org("  acme "));
        assert_eq!(ids(&out), vec!["a1"]);
    }

    #[test]
    fn missing_team_only_matches_blank_needle() {
        let out = filter(&fixture(), &FilterCriteria::default().team("sup"));
        assert_eq!(ids(&out), vec!["a3"]);
        let out = filter(&fixture(), &FilterCriteria::default().team("   "));
        assert_eq!(ids(&out), vec!["a1", "a2", "a3"]);
    }

    #[test]
    fn day_bounds_are_inclusive() {
        let criteria = FilterCriteria::default()
            .since("2026-02-01")
            .until("2026-02-10");
        assert_eq!(ids(&filter(&fixture(), &criteria)), vec!["a1", "a3"]);
    }

    #[test]
    fn blank_day_bounds_are_ignored() {
        let criteria = FilterCriteria::default().since("").until(" ");
        assert_eq!(filter(&fixture(), &criteria).len(), 3);
    }

    #[test]
    fn min_severity_filters_lower_alerts() {
        let mut alerts = fixture();
        alerts[1].severity = Severity::High;
        alerts[2].severity = Severity::Low;
        let out = filter(&alerts, &FilterCriteria::default().at_least(Severity::Medium));
        assert_eq!(ids(&out), vec!["a1", "a2"]);
    }

    #[test]
    fn feed_reports_total_before_limit() {
        let feed = alert_feed(&fixture(), &FilterCriteria::default(), Some(2));
        assert_eq!(feed.total_matched, 3);
        assert_eq!(ids(&feed.alerts), vec!["a1", "a2"]);
    }

    #[test]
    fn feed_without_limit_keeps_everything() {
        let feed = alert_feed(&fixture(), &FilterCriteria::default().org("beta"), None);
        assert_eq!(feed.total_matched, 1);
        assert_eq!(ids(&feed.alerts), vec!["a2"]);
    }
}
