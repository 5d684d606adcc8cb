//! Result View
//!
//! Bounds the ordered result list for display. Truncation is always
//! reported so callers can tell the shopper more results exist instead
//! of silently dropping them.

use shared::models::Product;

/// First `limit` products, plus whether anything was cut
pub fn bound(items: Vec<&Product>, limit: usize) -> (Vec<Product>, bool) {
    let truncated = items.len() > limit;
    let visible = items.into_iter().take(limit).cloned().collect();
    (visible, truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::query::DEFAULT_RESULT_LIMIT;

    fn make_products(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| Product {
                id: format!("{i}"),
                sku: format!("SO-CAP{i}"),
                name: format!("Cap {i}"),
                description: String::new(),
                brief_description: None,
                categories: vec!["Standoffs".to_string()],
                tags: vec!["standoffs".to_string()],
                price: Decimal::from(5),
                old_price: None,
                images: Vec::new(),
                available: true,
                unit: None,
            })
            .collect()
    }

    #[test]
    fn test_oversized_set_is_cut_at_the_limit() {
        let products = make_products(60);
        let (visible, truncated) = bound(products.iter().collect(), DEFAULT_RESULT_LIMIT);
        assert_eq!(visible.len(), 48);
        assert!(truncated);
        // Sorted order is preserved through the cut
        assert_eq!(visible[0].sku, "SO-CAP0");
        assert_eq!(visible[47].sku, "SO-CAP47");
    }

    #[test]
    fn test_small_set_passes_through() {
        let products = make_products(10);
        let (visible, truncated) = bound(products.iter().collect(), DEFAULT_RESULT_LIMIT);
        assert_eq!(visible.len(), 10);
        assert!(!truncated);
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        let products = make_products(48);
        let (visible, truncated) = bound(products.iter().collect(), DEFAULT_RESULT_LIMIT);
        assert_eq!(visible.len(), 48);
        assert!(!truncated);
    }
}
