//! Unified error handling for the storefront library.
//!
//! Each subsystem has its own error enum; `AppError` unifies them at the
//! application boundary so front ends deal with one type. Note what is
//! *not* an error anywhere in this crate: collection operations on absent
//! ids are no-ops, and storage write failures are logged warnings with the
//! in-memory state staying authoritative.

use thiserror::Error;

use clementine_core::PricingError;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::PaymentError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog service operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Local storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Price calculation failed.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Payment collaborator reported a failure.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No active user session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
