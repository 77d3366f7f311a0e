//! Release-date recency: "was this product released within the window?"

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use storefront_core::{DomainError, DomainResult};

/// Fixed-duration window within which a release counts as new.
///
/// Measured in whole days, not calendar months, so every product gets the same
/// window regardless of month length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RecencyWindow(Duration);

impl RecencyWindow {
    pub const DEFAULT_DAYS: i64 = 30;

    /// Build a window of `days` days. The window must be positive.
    pub fn from_days(days: i64) -> DomainResult<Self> {
        if days <= 0 {
            return Err(DomainError::invalid_input(format!(
                "recency window must be at least one day, got {days}"
            )));
        }
        Duration::try_days(days)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_input(format!("recency window of {days} days is too large")))
    }

    pub fn duration(self) -> Duration {
        self.0
    }

    pub fn days(self) -> i64 {
        self.0.num_days()
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self(Duration::days(Self::DEFAULT_DAYS))
    }
}

/// True when `release_date` falls inside the default 30-day window before `now`.
pub fn is_recent(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    is_recent_within(release_date, now, RecencyWindow::default())
}

/// True when `0 <= now - release_date < window`.
///
/// A release exactly one window old is no longer recent. A release after `now`
/// (negative elapsed time) is never recent.
pub fn is_recent_within(release_date: DateTime<Utc>, now: DateTime<Utc>, window: RecencyWindow) -> bool {
    let elapsed = now.signed_duration_since(release_date);
    elapsed >= Duration::zero() && elapsed < window.duration()
}

/// Parse a release date from an RFC 3339 timestamp or an ISO calendar date.
///
/// Calendar dates (`2024-05-01`) are taken as midnight UTC.
pub fn parse_release_date(input: &str) -> DomainResult<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| DomainError::invalid_input(format!("unparseable release date {input:?}: {e}")))
}
