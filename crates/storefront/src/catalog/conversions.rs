//! Conversions from raw wire records into domain products.

use rust_decimal::Decimal;
use tracing::warn;

use clementine_core::{Product, ProductId};

use super::CatalogError;
use super::wire::WireProduct;

/// Convert one wire record into a domain [`Product`].
///
/// The effective price is derived here, once, via the pricing calculator.
///
/// # Errors
///
/// Returns `CatalogError::InvalidRecord` if the monetary fields cannot be
/// represented as decimals or fail pricing validation.
pub fn convert_product(wire: WireProduct) -> Result<Product, CatalogError> {
    let id = wire.id;
    let base_price = decimal_field(id, "price", wire.price)?;
    let discount_percentage = decimal_field(id, "discountPercentage", wire.discount_percentage)?;

    Product::new(
        ProductId::new(id),
        wire.title,
        base_price,
        discount_percentage,
        wire.thumbnail,
        wire.category,
        wire.description,
        wire.rating,
    )
    .map_err(|e| CatalogError::InvalidRecord {
        id,
        reason: e.to_string(),
    })
}

/// Convert a batch of wire records, skipping invalid ones.
///
/// A single malformed upstream record degrades that record only, not the
/// whole listing; skipped records are logged.
pub fn convert_products(records: Vec<WireProduct>) -> Vec<Product> {
    records
        .into_iter()
        .filter_map(|wire| match convert_product(wire) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(error = %e, "Skipping invalid catalog record");
                None
            }
        })
        .collect()
}

fn decimal_field(id: i64, field: &str, value: f64) -> Result<Decimal, CatalogError> {
    Decimal::try_from(value).map_err(|e| CatalogError::InvalidRecord {
        id,
        reason: format!("{field}: {e}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn wire(id: i64, price: f64, discount: f64) -> WireProduct {
        WireProduct {
            id,
            title: format!("Product {id}"),
            price,
            discount_percentage: discount,
            thumbnail: format!("https://cdn.example.com/{id}/thumbnail.jpg"),
            description: "Test product.".to_string(),
            category: "beauty".to_string(),
            rating: 4.5,
        }
    }

    #[test]
    fn test_convert_derives_effective_price() {
        let product = convert_product(wire(1, 100.0, 20.0)).unwrap();
        assert_eq!(product.base_price, Decimal::from(100));
        assert_eq!(product.effective_price, Decimal::from(80));
    }

    #[test]
    fn test_convert_rejects_out_of_range_discount() {
        let err = convert_product(wire(1, 100.0, 120.0)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { id: 1, .. }));
    }

    #[test]
    fn test_convert_rejects_non_finite_price() {
        let err = convert_product(wire(2, f64::NAN, 0.0)).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRecord { id: 2, .. }));
    }

    #[test]
    fn test_batch_conversion_skips_invalid_records() {
        let products = convert_products(vec![
            wire(1, 10.0, 0.0),
            wire(2, -5.0, 0.0),
            wire(3, 30.0, 50.0),
        ]);
        let ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
