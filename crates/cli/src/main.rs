//! Clementine CLI - Browse the catalog and manage the cart and wishlist.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! clem products list
//! clem products list --category beauty
//! clem products list --offers
//! clem products show 1
//!
//! # Manage the cart
//! clem cart add 1
//! clem cart dec 1
//! clem cart list
//! clem cart checkout
//!
//! # Manage the wishlist
//! clem wishlist add 1
//! clem wishlist list
//! ```
//!
//! # Commands
//!
//! - `products` - Catalog browsing (list, show)
//! - `cart` - Cart mutations, listing, and dry-run checkout
//! - `wishlist` - Wishlist mutations and listing

#![cfg_attr(not(test), forbid(unsafe_code))]
// The CLI's user-facing output goes to stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List catalog products
    List {
        /// Only show products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only show discounted products
        #[arg(short, long)]
        offers: bool,

        /// Bypass the response cache and refetch from the catalog service
        #[arg(short, long)]
        refresh: bool,
    },
    /// Show one product in detail
    Show {
        /// Product id
        id: i64,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart (increments quantity if already present)
    Add {
        /// Product id
        id: i64,
    },
    /// Remove a product's line from the cart
    Remove {
        /// Product id
        id: i64,
    },
    /// Increase a line's quantity by one
    Inc {
        /// Product id
        id: i64,
    },
    /// Decrease a line's quantity by one (never below 1)
    Dec {
        /// Product id
        id: i64,
    },
    /// List cart lines and the subtotal
    List,
    /// Empty the cart
    Clear,
    /// Charge the cart subtotal through the dry-run payment gateway
    Checkout {
        /// Payment-method token to hand to the gateway
        #[arg(short, long, default_value = "tok_dry_run")]
        token: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Add a product to the wishlist (duplicates are ignored)
    Add {
        /// Product id
        id: i64,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        id: i64,
    },
    /// List wishlist entries
    List,
    /// Empty the wishlist
    Clear,
}

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> clementine_storefront::Result<()> {
    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List {
                category,
                offers,
                refresh,
            } => {
                commands::products::list(category.as_deref(), offers, refresh).await?;
            }
            ProductsAction::Show { id } => commands::products::show(id).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add { id } => commands::cart::add(id).await?,
            CartAction::Remove { id } => commands::cart::remove(id)?,
            CartAction::Inc { id } => commands::cart::increase(id)?,
            CartAction::Dec { id } => commands::cart::decrease(id)?,
            CartAction::List => commands::cart::list()?,
            CartAction::Clear => commands::cart::clear()?,
            CartAction::Checkout { token } => commands::cart::checkout(&token).await?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Add { id } => commands::wishlist::add(id).await?,
            WishlistAction::Remove { id } => commands::wishlist::remove(id)?,
            WishlistAction::List => commands::wishlist::list()?,
            WishlistAction::Clear => commands::wishlist::clear()?,
        },
    }
    Ok(())
}
