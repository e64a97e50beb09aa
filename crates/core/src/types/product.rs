//! Catalog product domain type.
//!
//! `Product` is the clean, validated shape the rest of the system works
//! with, separate from the raw wire types the catalog service returns.
//! Construction goes through [`Product::new`], which runs the pricing
//! calculator once, so every `Product` in hand carries a consistent
//! effective price ready to snapshot into a cart or wishlist.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::{self, PricingError};
use crate::types::id::ProductId;

/// A product in the catalog.
///
/// Read-only from the stores' perspective: cart and wishlist copy display
/// fields and the effective price out of it, they never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable catalog identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Price before any discount.
    pub base_price: Decimal,
    /// Discount percentage, within `0..=100`.
    pub discount_percentage: Decimal,
    /// Thumbnail image URL.
    pub thumbnail_url: String,
    /// Product category.
    pub category: String,
    /// Plain text description.
    pub description: String,
    /// Average review rating (e.g. 4.5).
    pub rating: f64,
    /// Price after the discount is applied. Derived, full precision.
    pub effective_price: Decimal,
}

impl Product {
    /// Build a product, deriving its effective price.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the base price is negative or the discount
    /// percentage lies outside `0..=100`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: ProductId,
        title: String,
        base_price: Decimal,
        discount_percentage: Decimal,
        thumbnail_url: String,
        category: String,
        description: String,
        rating: f64,
    ) -> Result<Self, PricingError> {
        let effective_price = pricing::effective_price(base_price, discount_percentage)?;
        Ok(Self {
            id,
            title,
            base_price,
            discount_percentage,
            thumbnail_url,
            category,
            description,
            rating,
            effective_price,
        })
    }

    /// Whether this product currently has a discount applied.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_percentage > Decimal::ZERO
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(base: &str, pct: &str) -> Result<Product, PricingError> {
        Product::new(
            ProductId::new(1),
            "Essence Mascara Lash Princess".to_string(),
            dec(base),
            dec(pct),
            "https://cdn.example.com/1/thumbnail.jpg".to_string(),
            "beauty".to_string(),
            "A popular mascara.".to_string(),
            4.56,
        )
    }

    #[test]
    fn test_new_derives_effective_price() {
        let p = product("100", "20").unwrap();
        assert_eq!(p.effective_price, dec("80.00"));
        assert!(p.is_discounted());
    }

    #[test]
    fn test_new_zero_discount() {
        let p = product("50", "0").unwrap();
        assert_eq!(p.effective_price, dec("50"));
        assert!(!p.is_discounted());
    }

    #[test]
    fn test_new_rejects_invalid_discount() {
        assert!(product("50", "101").is_err());
        assert!(product("-1", "10").is_err());
    }
}
