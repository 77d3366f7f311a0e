//! Product card view-model.
//!
//! Everything a presentation layer needs to draw one card in the listing grid,
//! already classified and formatted. Markup and styling stay with the caller.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::DomainResult;

use crate::format::pluralize;
use crate::product::Product;
use crate::recency::RecencyWindow;
use crate::variant::Variant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub href: String,
    pub name: String,
    pub image_src: String,
    pub variant: Variant,
    /// Regular price, e.g. `"$165.00"`.
    pub price: String,
    /// The regular price is drawn struck through when a sale price replaces it.
    pub price_struck_through: bool,
    /// Only set for [`Variant::OnSale`].
    pub sale_price: Option<String>,
    /// e.g. `"3 Colors"`.
    pub colors: String,
    pub badge: Option<&'static str>,
}

impl ProductCard {
    pub fn build(product: &Product, now: DateTime<Utc>, window: RecencyWindow) -> DomainResult<Self> {
        let variant = product.variant_within(now, window);
        let on_sale = variant == Variant::OnSale;

        Ok(Self {
            href: product.href(),
            name: product.name.clone(),
            image_src: product.image_src.clone(),
            variant,
            price: product.price.to_string(),
            price_struck_through: on_sale,
            sale_price: product.sale_price.filter(|_| on_sale).map(|p| p.to_string()),
            colors: pluralize("Color", product.num_of_colors)?,
            badge: variant.badge_label(),
        })
    }
}

/// Build cards for a whole listing, keeping catalog order.
///
/// Fails on the first product that cannot be rendered.
pub fn build_listing(products: &[Product], now: DateTime<Utc>, window: RecencyWindow) -> DomainResult<Vec<ProductCard>> {
    let cards = products
        .iter()
        .map(|product| ProductCard::build(product, now, window))
        .collect::<DomainResult<Vec<_>>>()?;

    tracing::debug!(
        cards = cards.len(),
        on_sale = cards.iter().filter(|c| c.variant == Variant::OnSale).count(),
        new_release = cards.iter().filter(|c| c.variant == Variant::NewRelease).count(),
        "built product listing"
    );

    Ok(cards)
}
