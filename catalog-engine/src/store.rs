//! Catalog Store
//!
//! Loads the static product data once at startup, normalizes every
//! record to the canonical shape, and serves read-only lookups for the
//! lifetime of the process. Nothing here mutates after load.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{Product, RawProduct};
use shared::{CatalogError, CatalogResult};

/// How many related products a detail page shows
pub const RELATED_LIMIT: usize = 4;

/// Read-only product collection with id and sku lookup indexes
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: Arc<Vec<Product>>,
    by_id: Arc<HashMap<String, usize>>,
    by_sku: Arc<HashMap<String, usize>>,
}

impl CatalogStore {
    /// Load and normalize a catalog from a JSON file
    pub fn load_from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Load and normalize a catalog from a JSON array of records
    pub fn from_json_str(data: &str) -> CatalogResult<Self> {
        let records: Vec<RawProduct> = serde_json::from_str(data)?;
        Self::from_records(records)
    }

    /// Normalize and validate raw records into a store
    ///
    /// Fails on the first malformed record; the catalog is all-or-nothing
    /// so pages never render against a partial snapshot.
    pub fn from_records(records: Vec<RawProduct>) -> CatalogResult<Self> {
        let mut products = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        let mut by_sku = HashMap::with_capacity(records.len());

        for (index, raw) in records.into_iter().enumerate() {
            let product = raw.normalize();
            validate(&product, index)?;

            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::Duplicate {
                    kind: "id",
                    value: product.id,
                });
            }
            if by_sku.insert(product.sku.clone(), index).is_some() {
                return Err(CatalogError::Duplicate {
                    kind: "sku",
                    value: product.sku,
                });
            }
            products.push(product);
        }

        tracing::info!(products = products.len(), "catalog loaded");

        Ok(Self {
            products: Arc::new(products),
            by_id: Arc::new(by_id),
            by_sku: Arc::new(by_sku),
        })
    }

    /// All products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Detail lookup by stable id
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    /// Detail lookup by stock code
    pub fn get_by_sku(&self, sku: &str) -> Option<&Product> {
        self.by_sku.get(sku).map(|&i| &self.products[i])
    }

    /// Products sharing a tag with `product`, excluding it, catalog order
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id && p.tags.iter().any(|t| product.tags.contains(t)))
            .take(RELATED_LIMIT)
            .collect()
    }

    /// First `limit` products of a category, catalog order (home-page rails)
    pub fn featured(&self, category_label: &str, limit: usize) -> Vec<&Product> {
        let tag = category_label.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| p.tags.iter().any(|t| *t == tag))
            .take(limit)
            .collect()
    }
}

fn validate(product: &Product, index: usize) -> CatalogResult<()> {
    if product.id.trim().is_empty() {
        return Err(CatalogError::MissingField { field: "id", index });
    }
    if product.sku.trim().is_empty() {
        return Err(CatalogError::MissingField { field: "sku", index });
    }
    if product.name.trim().is_empty() {
        return Err(CatalogError::MissingField {
            field: "name",
            index,
        });
    }
    if product.price < Decimal::ZERO {
        return Err(CatalogError::Validation(format!(
            "negative price on `{}`: {}",
            product.sku, product.price
        )));
    }
    if let Some(old) = product.old_price
        && old < Decimal::ZERO
    {
        return Err(CatalogError::Validation(format!(
            "negative old_price on `{}`: {}",
            product.sku, old
        )));
    }
    Ok(())
}
