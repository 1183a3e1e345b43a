//! Favorite operations.

use std::sync::Arc;

use async_trait::async_trait;

use clementine_core::{ProductId, UserId};

use crate::db::FavoriteStore;
use crate::dispatch::{Command, CommandHandler};
use crate::error::ApiError;
use crate::models::UserFavorite;

/// Record that a user favorited a product. Idempotent: adding a pair that
/// already exists changes nothing.
#[derive(Debug)]
pub struct AddFavorite {
    /// User doing the favoriting.
    pub user_id: UserId,
    /// The favorited product.
    pub product_id: ProductId,
}

impl Command for AddFavorite {}

/// Remove the favorite matching both keys. No-op if absent.
#[derive(Debug)]
pub struct RemoveFavorite {
    /// User whose favorite is removed.
    pub user_id: UserId,
    /// Product to un-favorite.
    pub product_id: ProductId,
}

impl Command for RemoveFavorite {}

/// Handler for [`AddFavorite`].
pub struct AddFavoriteHandler {
    favorites: Arc<dyn FavoriteStore>,
}

impl AddFavoriteHandler {
    pub fn new(favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl CommandHandler<AddFavorite> for AddFavoriteHandler {
    async fn handle(&self, cmd: AddFavorite) -> Result<(), ApiError> {
        let favorite = UserFavorite::new(cmd.user_id, cmd.product_id);
        self.favorites.add(&favorite).await?;
        Ok(())
    }
}

/// Handler for [`RemoveFavorite`].
pub struct RemoveFavoriteHandler {
    favorites: Arc<dyn FavoriteStore>,
}

impl RemoveFavoriteHandler {
    pub fn new(favorites: Arc<dyn FavoriteStore>) -> Self {
        Self { favorites }
    }
}

#[async_trait]
impl CommandHandler<RemoveFavorite> for RemoveFavoriteHandler {
    async fn handle(&self, cmd: RemoveFavorite) -> Result<(), ApiError> {
        self.favorites.remove(&cmd.user_id, &cmd.product_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::FavoriteStore as _;
    use crate::ops::testing::harness;

    #[tokio::test]
    async fn test_add_twice_stores_one_record() {
        let t = harness();

        for _ in 0..2 {
            t.dispatcher
                .execute(AddFavorite {
                    user_id: UserId::new("u1"),
                    product_id: ProductId::new("p1"),
                })
                .await
                .expect("add");
        }

        let favorites = t
            .favorites
            .list_for_user(&UserId::new("u1"))
            .await
            .expect("list");
        assert_eq!(favorites.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_excludes_pair_from_listing() {
        let t = harness();

        t.dispatcher
            .execute(AddFavorite {
                user_id: UserId::new("u1"),
                product_id: ProductId::new("p1"),
            })
            .await
            .expect("add");
        t.dispatcher
            .execute(AddFavorite {
                user_id: UserId::new("u1"),
                product_id: ProductId::new("p2"),
            })
            .await
            .expect("add");

        t.dispatcher
            .execute(RemoveFavorite {
                user_id: UserId::new("u1"),
                product_id: ProductId::new("p1"),
            })
            .await
            .expect("remove");

        let products: Vec<_> = t
            .favorites
            .list_for_user(&UserId::new("u1"))
            .await
            .expect("list")
            .into_iter()
            .map(|f| f.product_id)
            .collect();
        assert_eq!(products, vec![ProductId::new("p2")]);
    }

    #[tokio::test]
    async fn test_remove_of_absent_favorite_is_a_no_op() {
        let t = harness();

        t.dispatcher
            .execute(RemoveFavorite {
                user_id: UserId::new("u1"),
                product_id: ProductId::new("p1"),
            })
            .await
            .expect("absent remove succeeds");
    }
}
