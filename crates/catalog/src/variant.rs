//! Product card variant classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainResult, Money};

use crate::recency::{RecencyWindow, is_recent_within, parse_release_date};

/// Display state of a product card. Exactly one applies per product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Text of the corner badge, if the variant shows one.
    pub fn badge_label(self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just Released!"),
            Variant::Default => None,
        }
    }
}

impl core::fmt::Display for Variant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a product using the default 30-day recency window.
///
/// Rules, in order:
/// 1. a sale price is present (zero included) → [`Variant::OnSale`]
/// 2. released within the recency window → [`Variant::NewRelease`]
/// 3. otherwise → [`Variant::Default`]
///
/// Sale dominates recency: a discounted product released yesterday is
/// `OnSale`, never `NewRelease`.
pub fn classify(sale_price: Option<Money>, release_date: DateTime<Utc>, now: DateTime<Utc>) -> Variant {
    classify_within(sale_price, release_date, now, RecencyWindow::default())
}

/// Classify with an explicit recency window.
pub fn classify_within(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> Variant {
    let variant = match sale_price {
        Some(_) => Variant::OnSale,
        None if is_recent_within(release_date, now, window) => Variant::NewRelease,
        None => Variant::Default,
    };

    tracing::trace!(
        sale_price = ?sale_price,
        %release_date,
        %now,
        window_days = window.days(),
        %variant,
        "classified product"
    );

    variant
}

/// Classify from an unparsed release date.
///
/// Fails with `InvalidInput` when the date cannot be parsed.
pub fn classify_raw(sale_price: Option<Money>, release_date: &str, now: DateTime<Utc>) -> DomainResult<Variant> {
    let release_date = parse_release_date(release_date)?;
    Ok(classify(sale_price, release_date, now))
}
