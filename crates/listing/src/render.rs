//! Plain-text rendering of a listing, one line per card.

use storefront_catalog::ProductCard;

/// `{name} | {price}[ -> {sale}] | {colors}[ | {badge}]`
pub fn render_card(card: &ProductCard) -> String {
    let mut line = format!("{} | {}", card.name, card.price);
    if let Some(sale) = &card.sale_price {
        line.push_str(" -> ");
        line.push_str(sale);
    }
    line.push_str(" | ");
    line.push_str(&card.colors);
    if let Some(badge) = card.badge {
        line.push_str(" | ");
        line.push_str(badge);
    }
    line
}

pub fn render_listing(cards: &[ProductCard]) -> String {
    cards.iter().map(|card| render_card(card) + "\n").collect()
}
