//! Category Resolver
//!
//! Maps URL slugs to canonical category labels and descriptions.
//! Resolution is total: unknown slugs fall back to a title-cased
//! reconstruction that still participates in substring matching, so a
//! stale link renders an empty category page instead of an error.

use std::collections::HashMap;

use shared::models::{Category, CategoryKind};

/// Fixed slug table: slug, canonical label, description
///
/// Merges both storefront taxonomies; only the older one shipped
/// category descriptions.
const CATEGORY_TABLE: &[(&str, &str, Option<&str>)] = &[
    (
        "standoffs",
        "Standoffs",
        Some("Individual standoff caps, barrels, and components for custom sign mounting solutions."),
    ),
    (
        "standoff-kits",
        "Standoff Kits",
        Some("Complete standoff kits including caps, barrels, and all necessary hardware for easy installation."),
    ),
    (
        "led-kits",
        "LED Kits",
        Some("Illuminated standoff systems with integrated LED lighting for eye-catching displays."),
    ),
    (
        "wire-suspension",
        "Wire Suspension",
        Some("Cable and wire systems for suspended signs, shelving, and displays."),
    ),
    (
        "ez-rod-wire",
        "EZ - Rod & Wire",
        Some("Easy-to-install rod and wire systems for versatile display applications."),
    ),
    (
        "structurelite",
        "StructureLite",
        Some("Lightweight aluminum shelving and display systems."),
    ),
    (
        "hardware",
        "Hardware",
        Some("Screws, studs, spacers, and accessories for standoff installation."),
    ),
    (
        "demo-kits",
        "Demo Kits",
        Some("Sample and demonstration kits for testing and showcasing."),
    ),
    ("basic-standoff-kits", "Basic Standoff Kits", None),
    ("edge-grip-standoff-kits", "Edge Grip Standoff Kits", None),
    ("panel-clip-kits", "Panel Clip Kits", None),
    ("wire-kits", "Wire Kits", None),
    ("panel-hinges", "Panel Hinges", None),
    ("edge-grips", "Edge Grips", None),
    ("led-standoffs", "LED Standoffs", None),
    ("individual-pieces", "Individual Pieces", None),
];

/// Alias table: categories whose own match term would miss products
/// tagged under a broader name.
///
/// Keyed by the normalized slug (hyphens as word separators). "Basic
/// Standoff Kits" products are frequently tagged just "Standoff Kits"
/// in the source data, so that slug matches both.
const MATCH_ALIASES: &[(&str, &str)] = &[("basic standoff kits", "standoff kits")];

/// Resolves URL slugs to categories
#[derive(Debug, Clone)]
pub struct CategoryResolver {
    known: HashMap<String, Category>,
}

impl Default for CategoryResolver {
    fn default() -> Self {
        let mut known = HashMap::with_capacity(CATEGORY_TABLE.len());
        for (slug, label, description) in CATEGORY_TABLE {
            known.insert(
                (*slug).to_string(),
                Category {
                    slug: (*slug).to_string(),
                    label: (*label).to_string(),
                    description: description.map(str::to_string),
                    kind: CategoryKind::Known,
                    match_terms: match_terms(slug, label),
                },
            );
        }
        Self { known }
    }
}

impl CategoryResolver {
    /// Resolve a URL slug
    ///
    /// Total over all inputs: empty yields the "All Products" sentinel,
    /// unknown slugs yield a fallback category that may match nothing.
    pub fn resolve(&self, slug: &str) -> Category {
        let slug = slug.trim().to_lowercase();
        if slug.is_empty() {
            return Category::all_products();
        }
        if let Some(category) = self.known.get(&slug) {
            return category.clone();
        }

        tracing::warn!(slug = %slug, "unknown category slug, using fallback");
        let mut label = title_case_slug(&slug);
        if label.is_empty() {
            label = "Products".to_string();
        }
        Category {
            match_terms: match_terms(&slug, &label),
            slug,
            label,
            description: None,
            kind: CategoryKind::Fallback,
        }
    }

    /// Known categories in table order, for navigation menus
    pub fn categories(&self) -> Vec<Category> {
        CATEGORY_TABLE
            .iter()
            .filter_map(|(slug, _, _)| self.known.get(*slug).cloned())
            .collect()
    }
}

/// Lower-cased terms the filter checks for a category
fn match_terms(slug: &str, label: &str) -> Vec<String> {
    let mut terms = vec![label.to_lowercase()];
    let normalized = slug_to_term(slug);
    for (term, extra) in MATCH_ALIASES {
        if *term == normalized {
            terms.push((*extra).to_string());
        }
    }
    terms
}

/// Hyphens are word separators: `standoff-kits` -> `standoff kits`
fn slug_to_term(slug: &str) -> String {
    slug.trim().to_lowercase().replace('-', " ")
}

/// Derive a URL slug from a category label: lower-case, spaces to hyphens
pub fn slugify(label: &str) -> String {
    label.trim().to_lowercase().replace(' ', "-")
}

/// `led-kits` -> `Led Kits` (title-cased reconstruction for display)
fn title_case_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_slug_resolves_to_canonical_label() {
        let resolver = CategoryResolver::default();
        let category = resolver.resolve("standoff-kits");
        assert_eq!(category.label, "Standoff Kits");
        assert_eq!(category.kind, CategoryKind::Known);
        assert!(category.description.is_some());
        assert_eq!(category.match_terms, vec!["standoff kits"]);
    }

    #[test]
    fn test_empty_slug_is_the_all_sentinel() {
        let resolver = CategoryResolver::default();
        assert!(resolver.resolve("").is_all());
        assert!(resolver.resolve("   ").is_all());
    }

    #[test]
    fn test_unknown_slug_falls_back_to_title_case() {
        let resolver = CategoryResolver::default();
        let category = resolver.resolve("led-rope-lights");
        assert_eq!(category.label, "Led Rope Lights");
        assert_eq!(category.kind, CategoryKind::Fallback);
        assert_eq!(category.match_terms, vec!["led rope lights"]);
    }

    #[test]
    fn test_resolution_is_total() {
        let resolver = CategoryResolver::default();
        for slug in ["!!!", "a--b", "-", "LED-KITS", "ünïcode-slug"] {
            let category = resolver.resolve(slug);
            assert!(!category.label.is_empty() || category.is_all());
        }
        // Upper-case input normalizes onto the known table
        assert_eq!(resolver.resolve("LED-KITS").kind, CategoryKind::Known);
    }

    #[test]
    fn test_basic_standoff_kits_alias() {
        let resolver = CategoryResolver::default();
        let category = resolver.resolve("basic-standoff-kits");
        assert!(category.match_terms.contains(&"basic standoff kits".to_string()));
        assert!(category.match_terms.contains(&"standoff kits".to_string()));
        assert!(category.matches("standoff kits"));
    }

    #[test]
    fn test_slugify_matches_the_table() {
        for (slug, label, _) in CATEGORY_TABLE {
            // "EZ - Rod & Wire" predates the slug convention; its slug
            // was assigned by hand.
            if *slug == "ez-rod-wire" {
                continue;
            }
            assert_eq!(slugify(label), *slug);
        }
    }

    #[test]
    fn test_navigation_list_keeps_table_order() {
        let resolver = CategoryResolver::default();
        let labels: Vec<String> = resolver
            .categories()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels.len(), CATEGORY_TABLE.len());
        assert_eq!(labels[0], "Standoffs");
        assert_eq!(labels.last().unwrap(), "Individual Pieces");
    }
}
