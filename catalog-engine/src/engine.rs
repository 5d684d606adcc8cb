//! Composed Catalog Engine
//!
//! The single query surface the host application talks to: a loaded
//! store plus the category resolver, chained through the filter, sort,
//! and view stages.

use rust_decimal::Decimal;
use shared::CatalogResult;
use shared::models::Category;
use shared::query::{CatalogPage, CatalogQuery, PriceRange};

use crate::config::Config;
use crate::query::{filter, sort, view};
use crate::resolver::CategoryResolver;
use crate::store::CatalogStore;

/// Catalog store and resolver behind one query surface
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    store: CatalogStore,
    resolver: CategoryResolver,
    config: Config,
}

impl CatalogEngine {
    /// Wrap an already-loaded store with the default taxonomy
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            resolver: CategoryResolver::default(),
            config: Config::from_env(),
        }
    }

    /// Build an engine from configuration, loading the data file
    pub fn from_config(config: Config) -> CatalogResult<Self> {
        let store = CatalogStore::load_from_path(&config.data_path)?;
        Ok(Self {
            store,
            resolver: CategoryResolver::default(),
            config,
        })
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn resolver(&self) -> &CategoryResolver {
        &self.resolver
    }

    /// Resolve a category slug for breadcrumb and heading display
    pub fn resolve_category(&self, slug: &str) -> Category {
        self.resolver.resolve(slug)
    }

    /// Run the composed query: resolve, filter, sort, bound
    pub fn query(&self, query: &CatalogQuery) -> CatalogPage {
        let category = match &query.category_slug {
            Some(slug) => self.resolver.resolve(slug),
            None => Category::all_products(),
        };
        let range = query
            .price_range
            .unwrap_or(PriceRange {
                min: Decimal::ZERO,
                max: self.config.price_cap,
            })
            .clamped();
        let limit = query.limit.unwrap_or(self.config.result_limit);

        let matched = filter::apply(
            self.store.products(),
            &category,
            query.search.as_deref(),
            range,
        );
        let total_matched = matched.len();
        let ordered = sort::apply(matched, query.sort);
        let (results, truncated) = view::bound(ordered, limit);

        tracing::debug!(
            category = %category.label,
            sort = %query.sort,
            total_matched,
            truncated,
            "catalog query"
        );

        CatalogPage {
            results,
            total_matched,
            truncated,
        }
    }
}
