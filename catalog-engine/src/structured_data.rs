//! Structured Data
//!
//! schema.org `Product` JSON-LD for detail pages.

use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};
use shared::models::Product;

/// Build the JSON-LD value for one product
///
/// `base_url` carries no trailing slash; product images are served under
/// `/images/products/`.
pub fn product_schema(product: &Product, base_url: &str) -> Value {
    let availability = if product.available {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/OutOfStock"
    };

    json!({
        "@context": "https://schema.org/",
        "@type": "Product",
        "name": product.name,
        "image": product.images.iter()
            .map(|img| format!("{base_url}/images/products/{img}"))
            .collect::<Vec<_>>(),
        "description": product.description,
        "sku": product.sku,
        "mpn": product.sku,
        "brand": {
            "@type": "Brand",
            "name": "Gyford Standoff Systems",
        },
        "offers": {
            "@type": "Offer",
            "url": format!("{base_url}/product/{}", product.sku),
            "priceCurrency": "USD",
            "price": product.price.to_f64().unwrap_or_default(),
            "itemCondition": "https://schema.org/NewCondition",
            "availability": availability,
            "seller": {
                "@type": "Organization",
                "name": "Mounting Standoffs",
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RawProduct;

    #[test]
    fn test_schema_shape() {
        let product = serde_json::from_str::<RawProduct>(
            r#"{"id": "ws-asc-125", "sku": "WS-ASC-125", "name": "Wire Suspension Kit",
                "description": "Stainless cable system.",
                "categories": ["Wire Kits"], "price": 120.0,
                "images": [{"filename": "WS-ASC-125.jpg"}],
                "inStock": false}"#,
        )
        .unwrap()
        .normalize();

        let schema = product_schema(&product, "https://mountingstandoffs.com");
        assert_eq!(schema["@type"], "Product");
        assert_eq!(schema["sku"], "WS-ASC-125");
        assert_eq!(
            schema["image"][0],
            "https://mountingstandoffs.com/images/products/WS-ASC-125.jpg"
        );
        assert_eq!(
            schema["offers"]["url"],
            "https://mountingstandoffs.com/product/WS-ASC-125"
        );
        assert_eq!(schema["offers"]["price"], 120.0);
        assert_eq!(
            schema["offers"]["availability"],
            "https://schema.org/OutOfStock"
        );
    }
}
