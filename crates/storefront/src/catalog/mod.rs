//! Catalog service client and per-session snapshot.
//!
//! # Architecture
//!
//! - The catalog service is a plain REST/JSON collaborator
//!   (`GET /products`, `GET /products/:id`); this module owns the only HTTP
//!   client in the system.
//! - Responses are cached in-memory via `moka` (5 minute TTL); an explicit
//!   refresh invalidates the cache.
//! - [`Catalog`] is the read-only snapshot a session browses: the full
//!   product list plus the derived offers view. Cart and wishlist never
//!   mutate it, and a failed fetch degrades browsing only - the stores keep
//!   working over already snapshotted data.
//!
//! # Example
//!
//! ```rust,ignore
//! use clementine_storefront::catalog::{Catalog, CatalogClient};
//!
//! let client = CatalogClient::new(&config.catalog);
//! let catalog = Catalog::load(&client).await?;
//! for product in catalog.offers() {
//!     println!("{} is {}% off", product.title, product.discount_percentage);
//! }
//! ```

mod conversions;
mod wire;

pub use wire::{ProductsResponse, WireProduct};

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use clementine_core::{Product, ProductId};

use crate::config::CatalogConfig;
use conversions::{convert_product, convert_products};

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Service returned a non-success status.
    #[error("catalog service returned {status}: {body}")]
    Service {
        /// HTTP status code.
        status: reqwest::StatusCode,
        /// Truncated response body for diagnostics.
        body: String,
    },

    /// Product not found.
    #[error("product not found: {0}")]
    NotFound(ProductId),

    /// Upstream record failed validation.
    #[error("invalid catalog record {id}: {reason}")]
    InvalidRecord {
        /// Raw id of the offending record.
        id: i64,
        /// What was wrong with it.
        reason: String,
    },

    /// Catalog base URL could not be combined with a path.
    #[error("invalid catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
enum CacheValue {
    Product(Box<Product>),
    Products(Vec<Product>),
}

/// Client for the external catalog service.
///
/// Cheap to clone; the HTTP client and cache are shared behind an `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: url::Url,
    fetch_limit: u32,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.clone(),
                fetch_limit: config.fetch_limit,
                cache,
            }),
        }
    }

    /// Fetch the product listing.
    ///
    /// Invalid upstream records are skipped with a warning rather than
    /// failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product listing");
            return Ok(products);
        }

        let url = self.inner.base_url.join("products")?;
        let response = self
            .inner
            .client
            .get(url)
            .query(&[("limit", self.inner.fetch_limit)])
            .send()
            .await?;
        let response: ProductsResponse = Self::parse(response).await?;

        let products = convert_products(response.products);

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(products.clone()))
            .await;

        Ok(products)
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if the service has no such product,
    /// or another `CatalogError` if the request fails or the record is
    /// invalid.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        let url = self.inner.base_url.join(&format!("products/{id}"))?;
        let request = self.inner.client.get(url);

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }
        let wire: WireProduct = Self::parse(response).await?;
        let product = convert_product(wire)?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Invalidate all cached responses, forcing the next call to refetch.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }

    /// Read the body as text before parsing, for better error diagnostics.
    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, CatalogError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CatalogError::Service {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

/// Read-only per-session snapshot of the catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    refreshed_at: DateTime<Utc>,
}

impl Catalog {
    /// Fetch the listing once and snapshot it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the fetch fails. Callers treat this as a
    /// non-fatal "failed to load products" state; existing cart and
    /// wishlist data is unaffected.
    pub async fn load(client: &CatalogClient) -> Result<Self, CatalogError> {
        let products = client.get_products().await?;
        Ok(Self::from_products(products))
    }

    /// Build a snapshot from an already-converted product list.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products,
            refreshed_at: Utc::now(),
        }
    }

    /// All products, in service order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products with a non-zero discount - the offers view.
    pub fn offers(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_discounted())
    }

    /// Products in the given category.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category.eq_ignore_ascii_case(category))
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// When this snapshot was taken.
    #[must_use]
    pub const fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    /// Number of products in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the snapshot is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn product(id: i64, category: &str, pct: &str) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            dec("25"),
            dec(pct),
            format!("https://cdn.example.com/{id}/thumbnail.jpg"),
            category.to_string(),
            "Test product.".to_string(),
            4.1,
        )
        .unwrap()
    }

    #[test]
    fn test_offers_are_discounted_products_only() {
        let catalog = Catalog::from_products(vec![
            product(1, "beauty", "0"),
            product(2, "beauty", "15"),
            product(3, "groceries", "7.5"),
        ]);
        let offer_ids: Vec<i64> = catalog.offers().map(|p| p.id.as_i64()).collect();
        assert_eq!(offer_ids, vec![2, 3]);
    }

    #[test]
    fn test_by_category_filters_case_insensitively() {
        let catalog = Catalog::from_products(vec![
            product(1, "beauty", "0"),
            product(2, "groceries", "0"),
        ]);
        let ids: Vec<i64> = catalog.by_category("Beauty").map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::from_products(vec![product(1, "beauty", "0")]);
        assert!(catalog.get(ProductId::new(1)).is_some());
        assert!(catalog.get(ProductId::new(2)).is_none());
    }
}
