//! Back-office operations: request/handler pairs.
//!
//! Each operation is an immutable request value carrying exactly the
//! parameters it needs, paired with exactly one handler. Handlers forward
//! those parameters to the matching store call and add no business logic;
//! they are the seam where validation and authorization live when needed
//! (see [`categories::CreateCategoryHandler`]).

pub mod addresses;
pub mod categories;
pub mod favorites;

use std::sync::Arc;

use crate::db::{AddressStore, CategoryStore, FavoriteStore};
use crate::dispatch::{DispatchError, Dispatcher, DispatcherBuilder};

pub use addresses::DeleteAddress;
pub use categories::{CreateCategory, DeleteCategory, GetCategoryById, ListCategories};
pub use favorites::{AddFavorite, RemoveFavorite};

/// Wire every request type to its handler.
///
/// This is the single composition root for the dispatcher: all request
/// types known to the API are registered here, exactly once.
///
/// # Errors
///
/// Returns [`DispatchError::DuplicateHandler`] if a request type is wired
/// twice - a programming error that must abort startup.
pub fn build_dispatcher(
    categories: Arc<dyn CategoryStore>,
    addresses: Arc<dyn AddressStore>,
    favorites: Arc<dyn FavoriteStore>,
) -> Result<Dispatcher, DispatchError> {
    Ok(DispatcherBuilder::new()
        .register_command::<CreateCategory, _>(categories::CreateCategoryHandler::new(
            Arc::clone(&categories),
        ))?
        .register_command::<DeleteCategory, _>(categories::DeleteCategoryHandler::new(
            Arc::clone(&categories),
        ))?
        .register_query::<GetCategoryById, _>(categories::GetCategoryByIdHandler::new(
            Arc::clone(&categories),
        ))?
        .register_query::<ListCategories, _>(categories::ListCategoriesHandler::new(categories))?
        .register_command::<DeleteAddress, _>(addresses::DeleteAddressHandler::new(addresses))?
        .register_command::<AddFavorite, _>(favorites::AddFavoriteHandler::new(Arc::clone(
            &favorites,
        )))?
        .register_command::<RemoveFavorite, _>(favorites::RemoveFavoriteHandler::new(favorites))?
        .build())
}


#[cfg(test)]
mod tests {
    use super::testing::harness;

    #[tokio::test]
    async fn test_composition_root_registers_every_request_type() {
        // `harness()` already asserts that building succeeds (no duplicate
        // handler); dispatching each request type proves none is missing.
        let t = harness();

        t.dispatcher
            .query(super::ListCategories)
            .await
            .expect("ListCategories wired");
        t.dispatcher
            .query(super::GetCategoryById {
                id: "missing".into(),
            })
            .await
            .expect("GetCategoryById wired");
        t.dispatcher
            .execute(super::DeleteCategory {
                id: "missing".into(),
            })
            .await
            .expect("DeleteCategory wired");
        t.dispatcher
            .execute(super::DeleteAddress {
                user_id: "u".into(),
                address_id: "a".into(),
            })
            .await
            .expect("DeleteAddress wired");
        t.dispatcher
            .execute(super::AddFavorite {
                user_id: "u".into(),
                product_id: "p".into(),
            })
            .await
            .expect("AddFavorite wired");
        t.dispatcher
            .execute(super::RemoveFavorite {
                user_id: "u".into(),
                product_id: "p".into(),
            })
            .await
            .expect("RemoveFavorite wired");
    }
}
