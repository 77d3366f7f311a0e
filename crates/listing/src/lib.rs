//! `storefront-listing` — loads a product catalog and renders the listing grid
//! as text.

pub mod config;
pub mod render;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use storefront_catalog::{Product, RecencyWindow, build_listing};

pub use config::ListingConfig;

/// Read a catalog: a JSON array of products.
pub fn load_catalog(reader: impl Read) -> anyhow::Result<Vec<Product>> {
    serde_json::from_reader(reader).context("catalog is not a valid product list")
}

pub fn load_catalog_file(path: &Path) -> anyhow::Result<Vec<Product>> {
    let file = std::fs::File::open(path).with_context(|| format!("failed to open catalog {}", path.display()))?;
    load_catalog(std::io::BufReader::new(file)).with_context(|| format!("failed to read catalog {}", path.display()))
}

/// Classify, format and render every product in catalog order.
pub fn render_catalog(products: &[Product], now: DateTime<Utc>, window: RecencyWindow) -> anyhow::Result<String> {
    let cards = build_listing(products, now, window).context("failed to build product cards")?;
    Ok(render::render_listing(&cards))
}

/// Load the catalog at `path` and render it with `config`.
pub fn run(path: &Path, config: &ListingConfig) -> anyhow::Result<String> {
    let products = load_catalog_file(path)?;
    let now = config.now();

    tracing::info!(
        catalog = %path.display(),
        products = products.len(),
        %now,
        recency_days = config.recency_window.days(),
        "rendering listing"
    );

    render_catalog(&products, now, config.recency_window)
}
