//! Sort Strategy
//!
//! Stable orderings over the filtered set. `Featured` preserves catalog
//! order and is the identity; ties under every other mode keep their
//! catalog order too.

use shared::models::Product;
use shared::query::SortMode;

/// Return a new ordering of `items` under `mode`
///
/// The catalog snapshot itself is never touched; only the borrowed list
/// is rearranged.
pub fn apply<'a>(mut items: Vec<&'a Product>, mode: SortMode) -> Vec<&'a Product> {
    match mode {
        SortMode::Featured => {}
        SortMode::PriceAsc => items.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
        SortMode::NameAsc => items.sort_by_key(|p| sort_name(p)),
    }
    items
}

/// Case-folded sort key; sku stands in when a record has no display name
fn sort_name(product: &Product) -> String {
    if product.name.is_empty() {
        product.sku.to_lowercase()
    } else {
        product.name.to_lowercase()
    }
}
