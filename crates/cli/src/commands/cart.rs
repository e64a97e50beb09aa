//! Cart commands.
//!
//! Catalog availability only gates *adding* items: every other operation
//! works over the already snapshotted lines, so a catalog outage never
//! blocks or corrupts the cart.

use tracing::info;

use clementine_core::{ProductId, pricing};
use clementine_storefront::Result;
use clementine_storefront::services::{self, DryRunGateway, StaticSession, require_session};
use clementine_storefront::storage::LocalStore;
use clementine_storefront::store::CartStore;

/// Add a product to the cart, fetching its current catalog record.
pub async fn add(id: i64) -> Result<()> {
    let client = super::catalog_client()?;
    let product = client.get_product(ProductId::new(id)).await?;

    let mut cart = super::open_cart()?;
    cart.add_item(&product);
    info!(product_id = id, "Added to cart");
    list_store(&cart);
    Ok(())
}

/// Remove a product's line from the cart.
pub fn remove(id: i64) -> Result<()> {
    let mut cart = super::open_cart()?;
    cart.remove_item(ProductId::new(id));
    list_store(&cart);
    Ok(())
}

/// Increase a line's quantity.
pub fn increase(id: i64) -> Result<()> {
    let mut cart = super::open_cart()?;
    cart.increase_quantity(ProductId::new(id));
    list_store(&cart);
    Ok(())
}

/// Decrease a line's quantity, never below 1.
pub fn decrease(id: i64) -> Result<()> {
    let mut cart = super::open_cart()?;
    cart.decrease_quantity(ProductId::new(id));
    list_store(&cart);
    Ok(())
}

/// Print the cart lines and subtotal.
pub fn list() -> Result<()> {
    let cart = super::open_cart()?;
    list_store(&cart);
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<()> {
    let mut cart = super::open_cart()?;
    cart.clear();
    println!("Cart cleared.");
    Ok(())
}

/// Charge the cart subtotal through the dry-run gateway.
pub async fn checkout(token: &str) -> Result<()> {
    // The authentication collaborator reduces to one boolean; let the
    // environment stand in for it so the gate can be exercised.
    let session_active = std::env::var("STOREFRONT_SESSION_ACTIVE").map_or(true, |v| v != "0");
    require_session(&StaticSession(session_active))?;

    let cart = super::open_cart()?;
    let confirmation = services::checkout(&cart, &DryRunGateway, token).await?;
    println!(
        "Charged {} (reference {})",
        pricing::format_usd(confirmation.amount),
        confirmation.reference
    );
    Ok(())
}

fn list_store<S: LocalStore>(cart: &CartStore<S>) {
    if cart.is_empty() {
        println!("Cart is empty.");
        return;
    }
    for item in cart.items() {
        println!(
            "{:>5}  {:<45} {:>9} x{:<3} = {:>9}",
            item.id.as_i64(),
            item.title,
            pricing::format_usd(item.price),
            item.quantity,
            pricing::format_usd(item.line_total()),
        );
    }
    println!(
        "{} line(s), {} unit(s), subtotal {}",
        cart.len(),
        cart.total_quantity(),
        pricing::format_usd(cart.subtotal())
    );
}
