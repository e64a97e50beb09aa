//! Catalog browsing commands.

use clementine_core::{ProductId, pricing};
use clementine_storefront::Result;
use clementine_storefront::catalog::Catalog;

/// List the catalog, optionally filtered to a category or to offers only.
pub async fn list(category: Option<&str>, offers_only: bool, refresh: bool) -> Result<()> {
    let client = super::catalog_client()?;
    if refresh {
        client.invalidate_all().await;
    }
    let catalog = Catalog::load(&client).await?;

    let products: Vec<_> = if offers_only {
        match category {
            Some(category) => catalog
                .offers()
                .filter(|p| p.category.eq_ignore_ascii_case(category))
                .collect(),
            None => catalog.offers().collect(),
        }
    } else {
        match category {
            Some(category) => catalog.by_category(category).collect(),
            None => catalog.products().iter().collect(),
        }
    };

    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &products {
        if product.is_discounted() {
            // Struck-through original, recovered from the discounted value.
            let original = pricing::original_price(
                product.effective_price,
                product.discount_percentage,
            )?;
            println!(
                "{:>5}  {:<45} {:>9}  (was {}, -{}%)",
                product.id.as_i64(),
                product.title,
                pricing::format_usd(product.effective_price),
                pricing::format_usd(original),
                pricing::display(product.discount_percentage),
            );
        } else {
            println!(
                "{:>5}  {:<45} {:>9}",
                product.id.as_i64(),
                product.title,
                pricing::format_usd(product.effective_price),
            );
        }
    }
    println!("{} product(s)", products.len());

    Ok(())
}

/// Show one product in detail.
pub async fn show(id: i64) -> Result<()> {
    let client = super::catalog_client()?;
    let product = client.get_product(ProductId::new(id)).await?;

    println!("{}  (#{})", product.title, product.id);
    println!("  category:  {}", product.category);
    println!("  rating:    {:.2}", product.rating);
    println!("  price:     {}", pricing::format_usd(product.effective_price));
    if product.is_discounted() {
        println!(
            "  list:      {} (-{}%)",
            pricing::format_usd(product.base_price),
            pricing::display(product.discount_percentage)
        );
    }
    println!("  thumbnail: {}", product.thumbnail_url);
    println!("\n{}", product.description);

    Ok(())
}
