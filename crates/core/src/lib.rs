//! `storefront-core` — domain building blocks shared by the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no clock access).

pub mod error;
pub mod money;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::{CURRENCY_SYMBOL, Money};
pub use value_object::ValueObject;
