//! Catalog Query Engine
//!
//! Owns the storefront's product catalog: loading and normalizing the
//! static product data, resolving category slugs, and answering
//! filter/sort/bound queries for the host application's pages.
//!
//! Every query operation is a pure function over the immutable catalog
//! snapshot loaded at startup — safe to call repeatedly and concurrently
//! from read-only callers without locking.

pub mod cart;
pub mod config;
pub mod engine;
pub mod logger;
pub mod query;
pub mod resolver;
pub mod store;
pub mod structured_data;

// Re-exports
pub use cart::CartLine;
pub use config::Config;
pub use engine::CatalogEngine;
pub use resolver::CategoryResolver;
pub use shared::{
    CatalogError, CatalogPage, CatalogQuery, CatalogResult, Category, PriceRange, Product,
    SortMode,
};
pub use store::CatalogStore;
