//! Clementine Core - Shared domain types and pricing.
//!
//! This crate provides the types used across all Clementine components:
//! - `storefront` - Catalog, cart, and wishlist library
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no filesystem access. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, products, and cart/wishlist line items
//! - [`pricing`] - Discount arithmetic over `rust_decimal::Decimal`

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::PricingError;
pub use types::*;
