//! Query Types
//!
//! Request and response types for the composed catalog query.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Default number of products shown before truncation
pub const DEFAULT_RESULT_LIMIT: usize = 48;

/// Upper bound of the default price range, dollars
pub const DEFAULT_PRICE_CAP: u32 = 500;

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Catalog order, unchanged
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::NameAsc => "name-asc",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive price window applied by the filter pipeline
///
/// The upper bound stays inclusive even when the UI renders it as "500+".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(with = "rust_decimal::serde::float")]
    pub min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub max: Decimal,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(DEFAULT_PRICE_CAP),
        }
    }
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }.clamped()
    }

    /// Replace an unusable range with the default span
    ///
    /// The UI supplies ranges through constrained controls, so an
    /// inverted or negative range is noise, not an error.
    pub fn clamped(self) -> Self {
        if self.min < Decimal::ZERO || self.min > self.max {
            tracing::warn!(min = %self.min, max = %self.max, "invalid price range, using default");
            return Self::default();
        }
        self
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

/// Parameters for one catalog query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// URL slug of the category to browse; `None` browses everything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_slug: Option<String>,
    /// Free-text term matched against name, sku, and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub sort: SortMode,
    /// Display bound; the engine default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// Browse the whole catalog in store order
    pub fn all() -> Self {
        Self::default()
    }

    /// Browse one category
    pub fn in_category(slug: impl Into<String>) -> Self {
        Self {
            category_slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Free-text search over the whole catalog
    pub fn search_for(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn order_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// One page of query results
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    /// Products visible to the caller, in sorted order
    pub results: Vec<Product>,
    /// Size of the full filtered set before bounding
    pub total_matched: usize,
    /// Whether results were cut at the display limit
    pub truncated: bool,
}
