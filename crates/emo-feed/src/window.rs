//! Trailing time windows for the trend view.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

/// A closed `[since, until]` window of instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendWindow {
    pub since: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl TrendWindow {
    /// The `days` days ending at `now`.
    #[must_use]
    pub fn trailing(days: u32, now: DateTime<Utc>) -> Self {
        Self {
            since: now - Duration::days(i64::from(days)),
            until: now,
        }
    }

    /// `since` as an RFC 3339 query parameter (millisecond precision, `Z`).
    #[must_use]
    pub fn since_param(&self) -> String {
        self.since.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// `until` as an RFC 3339 query parameter (millisecond precision, `Z`).
    #[must_use]
    pub fn until_param(&self) -> String {
        self.until.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Whether a `YYYY-MM-DD` day key falls inside the window, comparing
    /// calendar days in UTC.
    #[must_use]
    pub fn contains_day(&self, day: &str) -> bool {
        let since = self.since.format("%Y-%m-%d").to_string();
        let until = self.until.format("%Y-%m-%d").to_string();
        since.as_str() <= day && day <= until.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 24, 9, 30, 0).unwrap()
    }

    #[test]
    fn trailing_window_spans_the_requested_days() {
        let window = TrendWindow::trailing(14, now());
        assert_eq!(window.since_param(), "2026-02-10T09:30:00.000Z");
        assert_eq!(window.until_param(), "2026-02-24T09:30:00.000Z");
    }

    #[test]
    fn contains_day_is_inclusive() {
        let window = TrendWindow::trailing(14, now());
        assert!(window.contains_day("2026-02-10"));
        assert!(window.contains_day("2026-02-24"));
        assert!(!window.contains_day("2026-02-09"));
        assert!(!window.contains_day("2026-02-25"));
    }

    #[test]
    fn zero_days_is_just_today() {
        let window = TrendWindow::trailing(0, now());
        assert_eq!(window.since, window.until);
        assert!(window.contains_day("2026-02-24"));
    }
}
