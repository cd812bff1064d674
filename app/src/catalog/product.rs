use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// One record of the external catalog. Fields the catalog sends beyond
/// these are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub price: f64,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Decode a JSON array of products, preserving source order.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_ignores_extra_fields() {
        let body = br#"[
            {"id": 2, "title": "Mens Casual", "price": 22.3, "description": "slim",
             "category": "men's clothing", "image": "https://example.test/2.jpg",
             "rating": {"rate": 4.1, "count": 259}},
            {"id": 1, "title": "Backpack", "price": 109.95, "image": "https://example.test/1.jpg"}
        ]"#;
        let products = decode_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 2);
        assert_eq!(products[1].title, "Backpack");
        assert_eq!(products[1].price_label(), "$109.95");
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let err = decode_products(br#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
