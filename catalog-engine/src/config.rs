//! Engine Configuration
//!
//! Host-facing knobs, all overridable through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CATALOG_DATA_PATH | ./data/products.json | Product data file |
//! | CATALOG_RESULT_LIMIT | 48 | Display bound per query |
//! | CATALOG_PRICE_CAP | 500 | Upper bound of the default price range |

use rust_decimal::Decimal;
use shared::query::{DEFAULT_PRICE_CAP, DEFAULT_RESULT_LIMIT};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the static product data file
    pub data_path: String,
    /// Display bound applied when a query does not set its own
    pub result_limit: usize,
    /// Upper bound of the default price range, dollars
    pub price_cap: Decimal,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self {
            data_path: std::env::var("CATALOG_DATA_PATH")
                .unwrap_or_else(|_| "./data/products.json".into()),
            result_limit: std::env::var("CATALOG_RESULT_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RESULT_LIMIT),
            price_cap: std::env::var("CATALOG_PRICE_CAP")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Decimal::from(DEFAULT_PRICE_CAP)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
