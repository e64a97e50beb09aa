//! CLI command implementations.

pub mod cart;
pub mod products;
pub mod wishlist;

use clementine_storefront::config::StorefrontConfig;
use clementine_storefront::storage::FileStore;
use clementine_storefront::store::{CartStore, WishlistStore};
use clementine_storefront::{AppError, catalog::CatalogClient};

/// Load configuration and hydrate the cart from the data directory.
fn open_cart() -> Result<CartStore<FileStore>, AppError> {
    let config = StorefrontConfig::from_env()?;
    Ok(CartStore::new(FileStore::new(config.data_dir)))
}

/// Load configuration and hydrate the wishlist from the data directory.
fn open_wishlist() -> Result<WishlistStore<FileStore>, AppError> {
    let config = StorefrontConfig::from_env()?;
    Ok(WishlistStore::new(FileStore::new(config.data_dir)))
}

/// Build a catalog client from the environment.
fn catalog_client() -> Result<CatalogClient, AppError> {
    let config = StorefrontConfig::from_env()?;
    Ok(CatalogClient::new(&config.catalog))
}
