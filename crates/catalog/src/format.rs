//! Text helpers for product cards.

use storefront_core::{DomainError, DomainResult, Money};

/// Render a major-unit amount as a price (`148` → `"$148.00"`).
///
/// See [`Money`] for the rounding and grouping convention. Negative or
/// non-finite amounts are rejected.
pub fn format_price(amount: f64) -> DomainResult<String> {
    Money::from_major(amount).map(|money| money.to_string())
}

/// `"{count} {noun}"` for a count of one, `"{count} {noun}s"` otherwise.
///
/// Suffix-only pluralization; there is no irregular-noun table.
pub fn pluralize(noun: &str, count: i64) -> DomainResult<String> {
    match count {
        n if n < 0 => Err(DomainError::invalid_input(format!(
            "count of {noun:?} must be non-negative, got {count}"
        ))),
        1 => Ok(format!("{count} {noun}")),
        _ => Ok(format!("{count} {noun}s")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_prices() {
        assert_eq!(format_price(148.0).unwrap(), "$148.00");
        assert_eq!(format_price(125.5).unwrap(), "$125.50");
        assert_eq!(format_price(0.0).unwrap(), "$0.00");
        assert_eq!(format_price(1234.5).unwrap(), "$1,234.50");
    }

    #[test]
    fn price_rounding_is_half_up() {
        assert_eq!(format_price(10.005).unwrap(), "$10.01");
        assert_eq!(format_price(10.004).unwrap(), "$10.00");
        assert_eq!(format_price(0.125).unwrap(), "$0.13");
    }

    #[test]
    fn negative_price_is_invalid() {
        assert!(matches!(format_price(-1.0), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn pluralizes_by_count() {
        assert_eq!(pluralize("Color", 1).unwrap(), "1 Color");
        assert_eq!(pluralize("Color", 2).unwrap(), "2 Colors");
        assert_eq!(pluralize("Color", 0).unwrap(), "0 Colors");
        assert_eq!(pluralize("Color", 12).unwrap(), "12 Colors");
    }

    #[test]
    fn negative_count_is_invalid() {
        let err = pluralize("Color", -1).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn formatters_are_idempotent() {
        assert_eq!(format_price(99.99).unwrap(), format_price(99.99).unwrap());
        assert_eq!(pluralize("Size", 3).unwrap(), pluralize("Size", 3).unwrap());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every non-negative count other than one gets the suffix.
            #[test]
            fn plural_suffix_unless_one(count in 0i64..1_000_000) {
                let text = pluralize("Color", count).unwrap();
                let prefix = format!("{count} ");
                prop_assert!(text.starts_with(&prefix));
                prop_assert_eq!(text.ends_with("Colors"), count != 1);
            }

            /// Property: whole-dollar prices render with ".00".
            #[test]
            fn whole_dollars_render_zero_cents(dollars in 0u32..1_000_000) {
                let text = format_price(f64::from(dollars)).unwrap();
                prop_assert!(text.starts_with('$'));
                prop_assert!(text.ends_with(".00"));
            }
        }
    }
}
