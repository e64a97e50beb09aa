//! Wishlist commands.

use tracing::info;

use clementine_core::{ProductId, pricing};
use clementine_storefront::Result;

/// Add a product to the wishlist. Already-saved products are left alone.
pub async fn add(id: i64) -> Result<()> {
    let client = super::catalog_client()?;
    let product = client.get_product(ProductId::new(id)).await?;

    let mut wishlist = super::open_wishlist()?;
    if wishlist.contains(product.id) {
        println!("Already on the wishlist.");
        return Ok(());
    }
    wishlist.add(&product);
    info!(product_id = id, "Added to wishlist");
    println!("Saved {} at {}.", product.title, pricing::format_usd(product.effective_price));
    Ok(())
}

/// Remove a product from the wishlist.
pub fn remove(id: i64) -> Result<()> {
    let mut wishlist = super::open_wishlist()?;
    wishlist.remove(ProductId::new(id));
    println!("{} entr(ies) remain.", wishlist.len());
    Ok(())
}

/// Print the wishlist entries.
pub fn list() -> Result<()> {
    let wishlist = super::open_wishlist()?;
    if wishlist.is_empty() {
        println!("Wishlist is empty.");
        return Ok(());
    }
    for entry in wishlist.items() {
        println!(
            "{:>5}  {:<45} {:>9}",
            entry.id.as_i64(),
            entry.title,
            pricing::format_usd(entry.price),
        );
    }
    println!("{} entr(ies)", wishlist.len());
    Ok(())
}

/// Empty the wishlist.
pub fn clear() -> Result<()> {
    let mut wishlist = super::open_wishlist()?;
    wishlist.clear();
    println!("Wishlist cleared.");
    Ok(())
}
