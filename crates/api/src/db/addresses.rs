//! Address store for database operations.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use clementine_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::Address;

/// Store contract for user addresses.
///
/// Addresses are scoped to their owning user: every operation takes the
/// composite key (`user_id`, `address_id`), and an identical `address_id`
/// under a different user is untouched.
#[async_trait]
pub trait AddressStore: Send + Sync {
    /// Insert a new address.
    async fn insert(&self, address: &Address) -> Result<(), RepositoryError>;

    /// Get an address by its composite key, or `None` if absent.
    async fn get(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<Option<Address>, RepositoryError>;

    /// Delete an address by its composite key. No-op if absent.
    async fn delete(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), RepositoryError>;
}

/// `PostgreSQL`-backed address store.
pub struct PgAddressStore {
    pool: PgPool,
}

impl PgAddressStore {
    /// Create a new address store on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressStore for PgAddressStore {
    async fn insert(&self, address: &Address) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO address (user_id, address_id, line1, city, country)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(address.user_id.as_str())
        .bind(address.address_id.as_str())
        .bind(&address.line1)
        .bind(&address.city)
        .bind(&address.country)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<Option<Address>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT user_id, address_id, line1, city, country
            FROM address
            WHERE user_id = $1 AND address_id = $2
            ",
        )
        .bind(user_id.as_str())
        .bind(address_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| {
            Ok(Address {
                user_id: UserId::new(r.try_get::<String, _>("user_id")?),
                address_id: AddressId::new(r.try_get::<String, _>("address_id")?),
                line1: r.try_get("line1")?,
                city: r.try_get("city")?,
                country: r.try_get("country")?,
            })
        })
        .transpose()
    }

    async fn delete(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            DELETE FROM address
            WHERE user_id = $1 AND address_id = $2
            ",
        )
        .bind(user_id.as_str())
        .bind(address_id.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
