//! Cart Handoff
//!
//! Line-item projection handed to the hosted cart widget. The widget
//! treats every field as an opaque display attribute; nothing here feeds
//! back into the catalog.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::Product;

/// Display attributes for one hosted-cart line item
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub url: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub quantity: u32,
}

impl CartLine {
    /// Project a product into the widget's attribute set
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            url: product_url(product),
            image: product.primary_image().to_string(),
            description: product.brief_description.clone(),
            quantity: quantity.max(1),
        }
    }
}

/// Detail-page URL for a product
pub fn product_url(product: &Product) -> String {
    format!("/product/{}", product.sku)
}
