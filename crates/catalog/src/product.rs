use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use storefront_core::Money;

use crate::recency::{RecencyWindow, parse_release_date};
use crate::variant::{Variant, classify_within};

/// Catalog record for one product, as supplied by the data source.
///
/// Deserializes from the storefront catalog JSON (camelCase keys). The sale
/// price is optional; `0` is a real sale price, `null` or a missing key means
/// the product is not discounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub image_src: String,
    pub price: Money,
    #[serde(default)]
    pub sale_price: Option<Money>,
    #[serde(deserialize_with = "deserialize_release_date")]
    pub release_date: DateTime<Utc>,
    /// Kept signed as supplied; a negative count is rejected when the card is built.
    pub num_of_colors: i64,
}

impl Product {
    /// Card variant at `now`, using the default recency window.
    pub fn variant(&self, now: DateTime<Utc>) -> Variant {
        self.variant_within(now, RecencyWindow::default())
    }

    pub fn variant_within(&self, now: DateTime<Utc>, window: RecencyWindow) -> Variant {
        classify_within(self.sale_price, self.release_date, now, window)
    }

    /// Link target of the product's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}

fn deserialize_release_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_release_date(&raw).map_err(serde::de::Error::custom)
}
