//! Storefront catalog: product card classification and formatting.
//!
//! Pure, deterministic domain logic (no IO, no clock access). Callers pass the
//! current time explicitly.

pub mod card;
pub mod format;
pub mod product;
pub mod recency;
pub mod variant;

pub use card::{ProductCard, build_listing};
pub use format::{format_price, pluralize};
pub use product::Product;
pub use recency::{RecencyWindow, is_recent, is_recent_within, parse_release_date};
pub use variant::{Variant, classify, classify_raw, classify_within};
