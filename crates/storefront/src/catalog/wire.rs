//! Raw wire types for the external catalog service.
//!
//! The service returns camelCase JSON records; these structs mirror that
//! shape exactly and are converted into domain types in
//! [`super::conversions`]. Monetary fields arrive as JSON numbers, so they
//! are carried as `f64` here and turned into `Decimal` during conversion.

use serde::Deserialize;

/// Response body of `GET /products`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    /// Product records in this page.
    pub products: Vec<WireProduct>,
    /// Total records available on the service.
    pub total: u64,
    /// Offset of this page.
    pub skip: u64,
    /// Page size requested.
    pub limit: u64,
}

/// One raw product record, as returned by `GET /products/:id`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    /// Stable identifier.
    pub id: i64,
    /// Product title.
    pub title: String,
    /// Base price before discount.
    pub price: f64,
    /// Discount percentage, expected within `0..=100`.
    #[serde(default)]
    pub discount_percentage: f64,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail: String,
    /// Plain text description.
    #[serde(default)]
    pub description: String,
    /// Category slug.
    #[serde(default)]
    pub category: String,
    /// Average review rating.
    #[serde(default)]
    pub rating: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_service_shape() {
        let json = r#"{
            "products": [{
                "id": 1,
                "title": "Essence Mascara Lash Princess",
                "description": "A popular mascara.",
                "category": "beauty",
                "price": 9.99,
                "discountPercentage": 7.17,
                "rating": 4.94,
                "thumbnail": "https://cdn.example.com/1/thumbnail.jpg",
                "stock": 5,
                "brand": "Essence"
            }],
            "total": 194,
            "skip": 0,
            "limit": 1
        }"#;

        let response: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total, 194);
        assert_eq!(response.products.len(), 1);
        let p = &response.products[0];
        assert_eq!(p.id, 1);
        assert!((p.discount_percentage - 7.17).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"id": 2, "title": "Bare", "price": 1.0}"#;
        let p: WireProduct = serde_json::from_str(json).unwrap();
        assert!(p.discount_percentage.abs() < f64::EPSILON);
        assert!(p.thumbnail.is_empty());
    }
}
