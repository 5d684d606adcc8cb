//! Category Model

use serde::{Deserialize, Serialize};

/// How a category value came to be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Sentinel: no category filtering applied
    All,
    /// Listed in the fixed slug table
    Known,
    /// Unrecognized slug, title-cased reconstruction
    Fallback,
}

/// Resolved category: canonical label plus the terms the filter matches on
///
/// Membership is substring containment over a product's joined tag line,
/// not exact equality — the source data is inconsistent about plurals and
/// exact naming, and breadth keeps stale links rendering instead of
/// erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: CategoryKind,
    /// Lower-cased terms checked against each product's tag line.
    /// Empty for the `All` sentinel; aliases append extra terms.
    pub match_terms: Vec<String>,
}

impl Category {
    /// The "All Products" sentinel — matches every product
    pub fn all_products() -> Self {
        Self {
            slug: String::new(),
            label: "All Products".to_string(),
            description: None,
            kind: CategoryKind::All,
            match_terms: Vec::new(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.kind == CategoryKind::All
    }

    /// Whether a product's joined tag line satisfies this category
    ///
    /// `category_line` must already be lower-cased.
    pub fn matches(&self, category_line: &str) -> bool {
        if self.is_all() {
            return true;
        }
        self.match_terms
            .iter()
            .any(|term| category_line.contains(term.as_str()))
    }
}
