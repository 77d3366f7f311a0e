//! Listing configuration, read once from the environment at startup.

use anyhow::Context;
use chrono::{DateTime, Utc};

use storefront_catalog::{RecencyWindow, parse_release_date};

/// Recency window length in days (default 30).
pub const RECENCY_DAYS_ENV: &str = "STOREFRONT_RECENCY_DAYS";
/// Fixed "current time" override (RFC 3339 timestamp or `YYYY-MM-DD`).
pub const NOW_ENV: &str = "STOREFRONT_NOW";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingConfig {
    pub recency_window: RecencyWindow,
    /// When unset, the wall clock is read once per run.
    pub now: Option<DateTime<Utc>>,
}

impl ListingConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Set-but-invalid values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let recency_window = match lookup(RECENCY_DAYS_ENV) {
            Some(raw) => {
                let days: i64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{RECENCY_DAYS_ENV}={raw:?} is not a whole number of days"))?;
                RecencyWindow::from_days(days).with_context(|| format!("invalid {RECENCY_DAYS_ENV}"))?
            }
            None => RecencyWindow::default(),
        };

        let now = lookup(NOW_ENV)
            .map(|raw| parse_release_date(&raw).with_context(|| format!("invalid {NOW_ENV}")))
            .transpose()?;

        Ok(Self { recency_window, now })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now.unwrap_or_else(Utc::now)
    }
}
