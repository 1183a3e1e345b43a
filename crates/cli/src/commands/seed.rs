//! Seed the database with sample data for local development.
//!
//! Inserts a handful of categories, one user's addresses, and a couple of
//! favorites so the API has something to serve. Safe to re-run: category
//! ids are regenerated each time, and favorites are unique per
//! (`user_id`, `product_id`) pair.

use tracing::info;

use clementine_api::db::{
    self, AddressStore, CategoryStore, FavoriteStore, PgAddressStore, PgCategoryStore,
    PgFavoriteStore,
};
use clementine_api::models::{Address, Category, UserFavorite};
use clementine_core::{ProductId, UserId};

/// Insert sample data.
///
/// # Errors
///
/// Returns an error if the database URL is missing or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let database_url = super::database_url()?;
    let pool = db::create_pool(&database_url).await?;

    let categories = PgCategoryStore::new(pool.clone());
    for (name, description) in [
        ("Shoes", "Footwear"),
        ("Hats", "Headwear"),
        ("Belts", "Accessories"),
    ] {
        categories.insert(&Category::new(name, description)).await?;
    }
    info!("Seeded categories");

    let user = UserId::new("demo-user");

    let addresses = PgAddressStore::new(pool.clone());
    addresses
        .insert(&Address::new(user.clone(), "1 Market St", "Lisbon", "PT"))
        .await?;
    info!("Seeded addresses");

    let favorites = PgFavoriteStore::new(pool);
    for product in ["demo-product-1", "demo-product-2"] {
        favorites
            .add(&UserFavorite::new(user.clone(), ProductId::new(product)))
            .await?;
    }
    info!("Seeded favorites");

    Ok(())
}
