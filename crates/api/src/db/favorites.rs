//! Favorite store for database operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use clementine_core::{FavoriteId, ProductId, UserId};

use super::RepositoryError;
use crate::models::UserFavorite;

/// Store contract for user favorites.
///
/// The store enforces at most one favorite per (`user_id`, `product_id`)
/// pair. Both `add` and `remove` are idempotent: adding an existing pair
/// and removing an absent one are no-ops.
#[async_trait]
pub trait FavoriteStore: Send + Sync {
    /// Add a favorite. No-op if the (`user_id`, `product_id`) pair already
    /// exists.
    async fn add(&self, favorite: &UserFavorite) -> Result<(), RepositoryError>;

    /// List a user's favorites, newest first.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserFavorite>, RepositoryError>;

    /// Remove the favorite matching both keys. No-op if absent.
    async fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), RepositoryError>;
}

/// `PostgreSQL`-backed favorite store.
pub struct PgFavoriteStore {
    pool: PgPool,
}

impl PgFavoriteStore {
    /// Create a new favorite store on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteStore for PgFavoriteStore {
    async fn add(&self, favorite: &UserFavorite) -> Result<(), RepositoryError> {
        // The unique index on (user_id, product_id) makes this idempotent.
        sqlx::query(
            r"
            INSERT INTO user_favorite (id, user_id, product_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, product_id) DO NOTHING
            ",
        )
        .bind(favorite.id.as_str())
        .bind(favorite.user_id.as_str())
        .bind(favorite.product_id.as_str())
        .bind(favorite.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserFavorite>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, product_id, created_at
            FROM user_favorite
            WHERE user_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(UserFavorite {
                    id: FavoriteId::new(r.try_get::<String, _>("id")?),
                    user_id: UserId::new(r.try_get::<String, _>("user_id")?),
                    product_id: ProductId::new(r.try_get::<String, _>("product_id")?),
                    created_at: r.try_get::<DateTime<Utc>, _>("created_at")?,
                })
            })
            .collect()
    }

    async fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM user_favorite
            WHERE user_id = $1 AND product_id = $2
            ",
        )
        .bind(user_id.as_str())
        .bind(product_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
