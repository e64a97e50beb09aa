//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod line_item;
pub mod product;

pub use id::*;
pub use line_item::{CartItem, WishlistItem};
pub use product::Product;
