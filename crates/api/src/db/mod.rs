//! Persistence layer for the back-office `PostgreSQL` database.
//!
//! # Database: `clementine`
//!
//! ## Tables
//!
//! - `category` - Product categories
//! - `address` - User addresses, keyed by (`user_id`, `address_id`)
//! - `user_favorite` - Favorited products, unique per (`user_id`, `product_id`)
//!
//! # Stores
//!
//! Each entity family has a narrow store trait ([`CategoryStore`],
//! [`AddressStore`], [`FavoriteStore`]) with a `PostgreSQL` implementation
//! and an in-memory implementation ([`memory`]) used by tests. Request
//! handlers depend only on the traits.
//!
//! Absence is never an error at this layer: lookups return `Option`, and
//! deletes are idempotent no-ops when the target row does not exist.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run explicitly via:
//! ```bash
//! cargo run -p clementine-cli -- migrate
//! ```
//! They are never run automatically on server startup.

pub mod addresses;
pub mod categories;
pub mod favorites;
pub mod memory;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub use addresses::{AddressStore, PgAddressStore};
pub use categories::{CategoryStore, PgCategoryStore};
pub use favorites::{FavoriteStore, PgFavoriteStore};

/// Embedded migrations for the back-office database.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
