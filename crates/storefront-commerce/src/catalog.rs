//! Product detail and variation types served by the product API.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Read-only view of a catalog item for the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: ProductId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub description: String,
    /// Price in major currency units. Formatting is the caller's concern.
    pub price: f64,
    /// Whether the product can currently be ordered.
    #[serde(default)]
    pub is_allowed_to_order: bool,
}

impl ProductDetail {
    pub fn new(id: impl Into<ProductId>, brand_name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            brand_name: brand_name.into(),
            description: String::new(),
            price,
            is_allowed_to_order: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn orderable(mut self, allowed: bool) -> Self {
        self.is_allowed_to_order = allowed;
        self
    }

    /// Name for page titles; falls back to the id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Product {}", self.id),
        }
    }
}

/// A named attribute group (e.g. "Color") with its selectable values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductVariation {
    pub name: String,
    /// Ordered values. The API may omit this or send `null`.
    #[serde(default)]
    pub value: Option<Vec<String>>,
}

impl ProductVariation {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(values),
        }
    }

    /// Values in display order; empty when absent.
    pub fn values(&self) -> &[String] {
        self.value.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_detail_from_api_json() {
        let json = r#"{
            "id": 12,
            "name": "Trail Runner",
            "brandName": "Acme",
            "description": "Lightweight shoe",
            "price": 89.5,
            "isAllowedToOrder": true
        }"#;

        let product: ProductDetail = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.brand_name, "Acme");
        assert_eq!(product.price, 89.5);
        assert!(product.is_allowed_to_order);
        assert_eq!(product.display_name(), "Trail Runner");
    }

    #[test]
    fn test_product_detail_optional_fields_default() {
        let product: ProductDetail = serde_json::from_str(r#"{"id": 3, "price": 10}"#).unwrap();
        assert_eq!(product.brand_name, "");
        assert_eq!(product.description, "");
        assert!(!product.is_allowed_to_order);
        assert_eq!(product.display_name(), "Product 3");
    }

    #[test]
    fn test_variation_values_missing_or_null() {
        let missing: ProductVariation = serde_json::from_str(r#"{"name": "Size"}"#).unwrap();
        assert!(missing.values().is_empty());

        let null: ProductVariation =
            serde_json::from_str(r#"{"name": "Size", "value": null}"#).unwrap();
        assert!(null.values().is_empty());
    }

    #[test]
    fn test_variation_values_keep_order() {
        let variation: ProductVariation =
            serde_json::from_str(r#"{"name": "Color", "value": ["Red", "Blue", "Green"]}"#)
                .unwrap();
        assert_eq!(variation.values(), ["Red", "Blue", "Green"]);
    }
}
