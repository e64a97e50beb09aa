//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional, with defaults suitable for local use:
//!
//! - `STOREFRONT_CATALOG_URL` - Base URL of the catalog service
//!   (default: `https://dummyjson.com`)
//! - `STOREFRONT_FETCH_LIMIT` - Page size for the product listing fetch
//!   (default: 100)
//! - `STOREFRONT_DATA_DIR` - Directory for the persisted cart and wishlist
//!   (default: `.clementine`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";
const DEFAULT_FETCH_LIMIT: u32 = 100;
const DEFAULT_DATA_DIR: &str = ".clementine";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog service configuration
    pub catalog: CatalogConfig,
    /// Directory holding the persisted collections
    pub data_dir: PathBuf,
}

/// Catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service
    pub base_url: Url,
    /// Page size for the product listing fetch
    pub fetch_limit: u32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog = CatalogConfig::from_env()?;
        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", DEFAULT_DATA_DIR));

        Ok(Self { catalog, data_dir })
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("STOREFRONT_CATALOG_URL", DEFAULT_CATALOG_URL);
        // A trailing slash matters for Url::join; normalize it here.
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/'))).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_CATALOG_URL".to_string(), e.to_string())
        })?;

        let fetch_limit = match std::env::var("STOREFRONT_FETCH_LIMIT") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_FETCH_LIMIT".to_string(), e.to_string())
            })?,
            Err(_) => DEFAULT_FETCH_LIMIT,
        };

        Ok(Self {
            base_url,
            fetch_limit,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_url_joins_cleanly() {
        let base = Url::parse(&format!("{DEFAULT_CATALOG_URL}/")).unwrap();
        let joined = base.join("products").unwrap();
        assert_eq!(joined.as_str(), "https://dummyjson.com/products");
    }

    #[test]
    fn test_trailing_slash_normalization() {
        let raw = "https://catalog.example.com///";
        let normalized = format!("{}/", raw.trim_end_matches('/'));
        let url = Url::parse(&normalized).unwrap();
        assert_eq!(url.join("products").unwrap().path(), "/products");
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("CLEMENTINE_TEST_UNSET_VAR", "fallback"),
            "fallback"
        );
    }
}
