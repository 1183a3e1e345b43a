//! Category store for database operations.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use clementine_core::CategoryId;

use super::RepositoryError;
use crate::models::Category;

/// Store contract for the category entity family.
///
/// Lookups return `Option` (absence is a result, not a failure) and deletes
/// converge to absence: deleting a missing category succeeds.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// Insert a freshly created category.
    async fn insert(&self, category: &Category) -> Result<(), RepositoryError>;

    /// Get a category by its ID, or `None` if no such category exists.
    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// List all categories, ordered by name.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// Delete a category by its ID. No-op if absent.
    async fn delete(&self, id: &CategoryId) -> Result<(), RepositoryError>;
}

/// `PostgreSQL`-backed category store.
pub struct PgCategoryStore {
    pool: PgPool,
}

impl PgCategoryStore {
    /// Create a new category store on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn category_from_row(row: &sqlx::postgres::PgRow) -> Result<Category, RepositoryError> {
    Ok(Category {
        id: CategoryId::new(row.try_get::<String, _>("id")?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl CategoryStore for PgCategoryStore {
    async fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO category (id, name, description)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(category.id.as_str())
        .bind(&category.name)
        .bind(&category.description)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, name, description
            FROM category
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(category_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, description
            FROM category
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(category_from_row).collect()
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), RepositoryError> {
        // Idempotent: zero rows affected is not an error.
        sqlx::query(
            r"
            DELETE FROM category
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
