//! Filter Pipeline
//!
//! Category, search, and price predicates applied in a fixed order. The
//! three compose with logical AND and each is independently bypassable;
//! the set is order-independent but the order is fixed so diagnostics
//! stay deterministic.

use shared::models::{Category, Product};
use shared::query::PriceRange;

/// Apply the full pipeline over the catalog snapshot
pub fn apply<'a>(
    products: &'a [Product],
    category: &Category,
    search: Option<&str>,
    range: PriceRange,
) -> Vec<&'a Product> {
    let term = search
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    products
        .iter()
        .filter(|p| matches_category(p, category))
        .filter(|p| term.as_deref().is_none_or(|t| matches_search(p, t)))
        .filter(|p| range.contains(p.price))
        .collect()
}

/// Category stage: tag-line substring containment; the sentinel passes all
fn matches_category(product: &Product, category: &Category) -> bool {
    category.is_all() || category.matches(&product.category_line())
}

/// Search stage: case-insensitive containment in name, sku, or description
///
/// `term` must already be lower-cased.
fn matches_search(product: &Product, term: &str) -> bool {
    product.name.to_lowercase().contains(term)
        || product.sku.to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
}
