//! End-to-end store scenarios over the file-backed storage.
//!
//! These walk the cart and wishlist through full user sessions, including
//! reloads (fresh stores hydrating from the same data directory), the way a
//! browser session would.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;

use clementine_core::{Product, ProductId, pricing};
use clementine_storefront::storage::FileStore;
use clementine_storefront::store::{CartStore, WishlistStore};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn product(id: i64, title: &str, base: &str, pct: &str) -> Product {
    Product::new(
        ProductId::new(id),
        title.to_string(),
        dec(base),
        dec(pct),
        format!("https://cdn.example.com/{id}/thumbnail.jpg"),
        "beauty".to_string(),
        format!("{title} description"),
        4.5,
    )
    .unwrap()
}

#[test]
fn cart_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::new(FileStore::new(dir.path()));
    let a = product(1, "Product A", "100", "20");

    cart.add_item(&a);
    assert_eq!(cart.len(), 1);
    assert_eq!(pricing::format_usd(cart.items()[0].price), "$80.00");
    assert_eq!(pricing::format_usd(cart.subtotal()), "$80.00");

    cart.add_item(&a);
    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(pricing::format_usd(cart.subtotal()), "$160.00");

    cart.decrease_quantity(a.id);
    assert_eq!(cart.items()[0].quantity, 1);
    assert_eq!(pricing::format_usd(cart.subtotal()), "$80.00");

    cart.remove_item(a.id);
    assert!(cart.is_empty());
    assert_eq!(pricing::format_usd(cart.subtotal()), "$0.00");
}

#[test]
fn cart_survives_session_reload() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = CartStore::new(FileStore::new(dir.path()));
        cart.add_item(&product(3, "Third", "30", "0"));
        cart.add_item(&product(1, "First", "10", "50"));
        cart.add_item(&product(1, "First", "10", "50"));
    }

    // New session over the same data directory.
    let cart = CartStore::new(FileStore::new(dir.path()));
    assert_eq!(cart.len(), 2);
    // Insertion order preserved across the reload.
    assert_eq!(cart.items()[0].id, ProductId::new(3));
    assert_eq!(cart.items()[1].id, ProductId::new(1));
    assert_eq!(cart.items()[1].quantity, 2);
    assert_eq!(cart.subtotal(), dec("40.00"));
}

#[test]
fn cart_clear_looks_like_fresh_hydration() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = CartStore::new(FileStore::new(dir.path()));
    cart.add_item(&product(1, "First", "10", "0"));
    cart.clear();
    assert_eq!(cart.subtotal(), Decimal::ZERO);

    let reloaded = CartStore::new(FileStore::new(dir.path()));
    assert!(reloaded.is_empty());
}

#[test]
fn wishlist_worked_example() {
    let dir = tempfile::tempdir().unwrap();
    let mut wishlist = WishlistStore::new(FileStore::new(dir.path()));
    let b = product(2, "Product B", "50", "0");

    wishlist.add(&b);
    wishlist.add(&b);
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist.items()[0].price, dec("50"));
}

#[test]
fn wishlist_survives_session_reload() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut wishlist = WishlistStore::new(FileStore::new(dir.path()));
        wishlist.add(&product(2, "Second", "50", "0"));
        wishlist.add(&product(7, "Seventh", "19.99", "5"));
        wishlist.clear();
        wishlist.add(&product(9, "Ninth", "2.49", "0"));
    }

    let wishlist = WishlistStore::new(FileStore::new(dir.path()));
    assert_eq!(wishlist.len(), 1);
    assert!(wishlist.contains(ProductId::new(9)));
    assert!(!wishlist.contains(ProductId::new(2)));
}

#[test]
fn cart_and_wishlist_are_independent_keys() {
    let dir = tempfile::tempdir().unwrap();

    let mut cart = CartStore::new(FileStore::new(dir.path()));
    let mut wishlist = WishlistStore::new(FileStore::new(dir.path()));
    cart.add_item(&product(1, "First", "10", "0"));
    wishlist.add(&product(2, "Second", "20", "0"));

    // Clearing one collection never touches the other.
    cart.clear();
    let wishlist_reloaded = WishlistStore::new(FileStore::new(dir.path()));
    assert_eq!(wishlist_reloaded.len(), 1);

    wishlist.clear();
    let cart_reloaded = CartStore::new(FileStore::new(dir.path()));
    assert!(cart_reloaded.is_empty());
}

#[test]
fn snapshot_price_ignores_later_catalog_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::new(FileStore::new(dir.path()));

    cart.add_item(&product(1, "First", "100", "20"));
    // The catalog's discount deepens mid-session; the cart must not track it.
    cart.add_item(&product(1, "First", "100", "75"));
    assert_eq!(cart.subtotal(), dec("160.00"));

    // Only remove + re-add takes a fresh snapshot.
    cart.remove_item(ProductId::new(1));
    cart.add_item(&product(1, "First", "100", "75"));
    assert_eq!(cart.subtotal(), dec("25.00"));
}
