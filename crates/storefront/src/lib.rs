//! Clementine Storefront library.
//!
//! The headless core of the storefront: a catalog client with caching, a
//! persisted cart and wishlist, and the collaborator contracts (session,
//! payment) the outer UI plugs into. There is no rendering or routing here;
//! this crate is the part a view layer consumes.
//!
//! # Data flow
//!
//! The [`catalog`] module fetches products from the external catalog service
//! and derives each product's effective price once. User actions mutate the
//! [`store`] collections, which snapshot prices at insertion time and mirror
//! themselves to [`storage`] on every mutation. Catalog unavailability never
//! touches the collections - they stay fully functional over already
//! snapshotted data.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{AppError, Result};
