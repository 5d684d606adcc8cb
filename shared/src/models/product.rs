//! Product Model
//!
//! `RawProduct` tolerates the inconsistent shapes found in the two source
//! catalogs (category as string or array, image entries as objects or
//! paths, two different stock markers). `Product` is the canonical form
//! every query operates on. Normalization happens exactly once, when the
//! catalog store loads.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Shown when a product record carries no images
pub const PLACEHOLDER_IMAGE: &str = "placeholder.png";

/// Product id as it appears in the source data (string or integer)
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Category membership as it appears in the source data
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCategories {
    One(String),
    Many(Vec<String>),
}

impl RawCategories {
    fn into_labels(self) -> Vec<String> {
        match self {
            RawCategories::One(label) => vec![label],
            RawCategories::Many(labels) => labels,
        }
    }
}

/// Image reference as it appears in the source data
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawImage {
    Named { filename: String },
    Path(String),
}

impl RawImage {
    fn into_filename(self) -> String {
        match self {
            RawImage::Named { filename } => filename,
            RawImage::Path(path) => path,
        }
    }
}

/// Product record as loaded from the static data source
///
/// Field names follow the source data, inconsistencies included.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: RawId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub brief_description: Option<String>,
    /// Single label or tag list, under either field name
    #[serde(alias = "categories")]
    pub category: RawCategories,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub old_price: Option<Decimal>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    /// Explicit stock flag (one source variant)
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
    /// Wholesale cost; its presence marks the item in-stock (other variant)
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub gyford_cost: Option<Decimal>,
    pub unit: Option<String>,
}

impl RawProduct {
    /// Collapse the raw record into the canonical `Product` shape
    ///
    /// Shape branching lives here and nowhere else.
    pub fn normalize(self) -> Product {
        let categories = self.category.into_labels();
        let tags = categories
            .iter()
            .map(|label| label.trim().to_lowercase())
            .collect();

        // An explicit flag wins; otherwise a present wholesale cost marks
        // the item in stock, and silence leaves it purchasable.
        let available = match (self.in_stock, &self.gyford_cost) {
            (Some(flag), _) => flag,
            (None, Some(_)) => true,
            (None, None) => true,
        };

        Product {
            id: self.id.into_string(),
            sku: self.sku,
            name: self.name,
            description: self.description,
            brief_description: self.brief_description,
            categories,
            tags,
            price: self.price,
            old_price: self.old_price,
            images: self.images.into_iter().map(RawImage::into_filename).collect(),
            available,
            unit: self.unit,
        }
    }
}

/// Canonical product entity (immutable once loaded)
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub description: String,
    pub brief_description: Option<String>,
    /// Category labels as authored, for display
    pub categories: Vec<String>,
    /// Lower-cased category tags, for matching
    pub tags: Vec<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub old_price: Option<Decimal>,
    pub images: Vec<String>,
    pub available: bool,
    pub unit: Option<String>,
}

impl Product {
    /// First image, or the placeholder when the record has none
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Previous price, only when it is an actual markdown
    pub fn display_old_price(&self) -> Option<Decimal> {
        self.old_price.filter(|old| *old > self.price)
    }

    /// Percentage saved against `old_price`, rounded half away from zero
    ///
    /// `None` unless `old_price > price`.
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.display_old_price()?;
        let pct = (old - self.price) / old * Decimal::from(100);
        pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }

    /// Lower-cased tags joined into one line for substring matching
    pub fn category_line(&self) -> String {
        self.tags.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Product {
        serde_json::from_str::<RawProduct>(json)
            .expect("raw product should parse")
            .normalize()
    }

    #[test]
    fn test_normalize_single_category_string() {
        let product = parse(
            r#"{"id": 12, "sku": "SO-CAP9", "name": "Aluminum Cap",
                "category": "Standoffs", "price": 4.5,
                "inStock": true, "unit": "each"}"#,
        );
        assert_eq!(product.id, "12");
        assert_eq!(product.categories, vec!["Standoffs"]);
        assert_eq!(product.tags, vec!["standoffs"]);
        assert!(product.available);
        assert_eq!(product.unit.as_deref(), Some("each"));
    }

    #[test]
    fn test_normalize_category_array_and_images() {
        let product = parse(
            r#"{"id": "sok-peg9", "sku": "SOK-PEG9", "name": "Edge Grip Kit",
                "categories": ["Edge Grip Standoff Kits", "Standoff Kits"],
                "price": 89.0, "old_price": 99.0,
                "images": [{"filename": "SOK-PEG9.jpg"}, "SOK-PEG9-side.jpg"],
                "gyford_cost": 61.3}"#,
        );
        assert_eq!(product.tags, vec!["edge grip standoff kits", "standoff kits"]);
        assert_eq!(product.images, vec!["SOK-PEG9.jpg", "SOK-PEG9-side.jpg"]);
        assert_eq!(product.primary_image(), "SOK-PEG9.jpg");
        assert!(product.available);
    }

    #[test]
    fn test_available_explicit_flag_wins() {
        let product = parse(
            r#"{"id": 1, "sku": "HD-X", "name": "X", "category": "Hardware",
                "price": 1.0, "inStock": false, "gyford_cost": 0.5}"#,
        );
        assert!(!product.available);
    }

    #[test]
    fn test_available_defaults_to_purchasable() {
        let product = parse(
            r#"{"id": 1, "sku": "HD-X", "name": "X", "category": "Hardware",
                "price": 1.0}"#,
        );
        assert!(product.available);
    }

    #[test]
    fn test_primary_image_placeholder_fallback() {
        let product = parse(
            r#"{"id": 1, "sku": "HD-X", "name": "X", "category": "Hardware",
                "price": 1.0}"#,
        );
        assert_eq!(product.primary_image(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_discount_percent() {
        let mut product = parse(
            r#"{"id": 1, "sku": "WS-1", "name": "Wire Kit",
                "category": "Wire Kits", "price": 150.0, "old_price": 200.0}"#,
        );
        assert_eq!(product.discount_percent(), Some(25));

        // Rounds half away from zero: 1/3 off -> 33%, 2/3 off -> 67%
        product.price = Decimal::from(2);
        product.old_price = Some(Decimal::from(3));
        assert_eq!(product.discount_percent(), Some(33));
        product.price = Decimal::from(1);
        assert_eq!(product.discount_percent(), Some(67));
    }

    #[test]
    fn test_discount_requires_markdown() {
        let product = parse(
            r#"{"id": 1, "sku": "WS-1", "name": "Wire Kit",
                "category": "Wire Kits", "price": 200.0, "old_price": 200.0}"#,
        );
        assert_eq!(product.display_old_price(), None);
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_non_numeric_price_rejected() {
        let raw = serde_json::from_str::<RawProduct>(
            r#"{"id": 1, "sku": "HD-X", "name": "X", "category": "Hardware",
                "price": "4.50"}"#,
        );
        assert!(raw.is_err());
    }
}
