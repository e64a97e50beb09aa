//! Cart and wishlist line items.
//!
//! A line item is a copy of a product's display fields plus the effective
//! price captured at the moment of insertion - a snapshot, not a live
//! reference. Catalog price changes mid-session never retroactively alter a
//! collection the user already committed to.
//!
//! Both types round-trip exactly through serde: the persisted collections
//! are JSON arrays of these structs, and `Decimal` serializes as a string
//! so no precision is lost across reloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::product::Product;

/// One row in the cart, representing one distinct product.
///
/// Invariant: `quantity >= 1`. A line reaching zero must be removed, never
/// retained; the cart store enforces this by refusing to decrement below 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product title at the time of insertion.
    pub title: String,
    /// Thumbnail URL at the time of insertion.
    pub thumbnail_url: String,
    /// Product category at the time of insertion.
    pub category: String,
    /// Effective price snapshot taken when the line was created.
    pub price: Decimal,
    /// Number of units, always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a fresh line for a product with quantity 1.
    ///
    /// The price snapshot is the product's effective price at this moment.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            thumbnail_url: product.thumbnail_url.clone(),
            category: product.category.clone(),
            price: product.effective_price,
            quantity: 1,
        }
    }

    /// Line total: price snapshot times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// One row in the wishlist. No quantity - the wishlist is a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Product this entry refers to.
    pub id: ProductId,
    /// Product title at the time of insertion.
    pub title: String,
    /// Thumbnail URL at the time of insertion.
    pub thumbnail_url: String,
    /// Product category at the time of insertion.
    pub category: String,
    /// Effective price snapshot taken when the entry was created.
    pub price: Decimal,
}

impl WishlistItem {
    /// Create a wishlist entry for a product, snapshotting its price.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            thumbnail_url: product.thumbnail_url.clone(),
            category: product.category.clone(),
            price: product.effective_price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn sample_product() -> Product {
        Product::new(
            ProductId::new(9),
            "Kiwi".to_string(),
            dec("2.49"),
            dec("10.32"),
            "https://cdn.example.com/9/thumbnail.jpg".to_string(),
            "groceries".to_string(),
            "Fresh kiwi fruit.".to_string(),
            4.37,
        )
        .unwrap()
    }

    #[test]
    fn test_cart_item_snapshots_effective_price() {
        let product = sample_product();
        let item = CartItem::from_product(&product);
        assert_eq!(item.price, product.effective_price);
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_line_total_scales_with_quantity() {
        let mut item = CartItem::from_product(&sample_product());
        item.quantity = 3;
        assert_eq!(item.line_total(), item.price * dec("3"));
    }

    #[test]
    fn test_cart_item_serde_round_trip() {
        let item = CartItem::from_product(&sample_product());
        let json = serde_json::to_string(&item).unwrap();
        let back: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_wishlist_item_serde_round_trip() {
        let entry = WishlistItem::from_product(&sample_product());
        let json = serde_json::to_string(&entry).unwrap();
        let back: WishlistItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
