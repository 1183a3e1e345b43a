//! In-memory store implementations.
//!
//! Test doubles for the store traits, backed by `parking_lot` mutexes.
//! They implement the same semantics as the `PostgreSQL` stores: absence is
//! a valid result, deletes are idempotent, and favorites are unique per
//! (`user_id`, `product_id`) pair.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use clementine_core::{AddressId, CategoryId, ProductId, UserId};

use super::{AddressStore, CategoryStore, FavoriteStore, RepositoryError};
use crate::models::{Address, Category, UserFavorite};

/// In-memory category store.
#[derive(Default)]
pub struct MemoryCategoryStore {
    categories: Mutex<BTreeMap<CategoryId, Category>>,
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn insert(&self, category: &Category) -> Result<(), RepositoryError> {
        self.categories
            .lock()
            .insert(category.id.clone(), category.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: &CategoryId) -> Result<Option<Category>, RepositoryError> {
        Ok(self.categories.lock().get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let mut categories: Vec<_> = self.categories.lock().values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), RepositoryError> {
        self.categories.lock().remove(id);
        Ok(())
    }
}

/// In-memory address store, keyed by (`user_id`, `address_id`).
#[derive(Default)]
pub struct MemoryAddressStore {
    addresses: Mutex<BTreeMap<(UserId, AddressId), Address>>,
}

#[async_trait]
impl AddressStore for MemoryAddressStore {
    async fn insert(&self, address: &Address) -> Result<(), RepositoryError> {
        self.addresses.lock().insert(
            (address.user_id.clone(), address.address_id.clone()),
            address.clone(),
        );
        Ok(())
    }

    async fn get(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<Option<Address>, RepositoryError> {
        Ok(self
            .addresses
            .lock()
            .get(&(user_id.clone(), address_id.clone()))
            .cloned())
    }

    async fn delete(
        &self,
        user_id: &UserId,
        address_id: &AddressId,
    ) -> Result<(), RepositoryError> {
        self.addresses
            .lock()
            .remove(&(user_id.clone(), address_id.clone()));
        Ok(())
    }
}

/// In-memory favorite store with the (`user_id`, `product_id`) uniqueness
/// constraint.
#[derive(Default)]
pub struct MemoryFavoriteStore {
    favorites: Mutex<BTreeMap<(UserId, ProductId), UserFavorite>>,
}

#[async_trait]
impl FavoriteStore for MemoryFavoriteStore {
    async fn add(&self, favorite: &UserFavorite) -> Result<(), RepositoryError> {
        self.favorites
            .lock()
            .entry((favorite.user_id.clone(), favorite.product_id.clone()))
            .or_insert_with(|| favorite.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<UserFavorite>, RepositoryError> {
        let mut favorites: Vec<_> = self
            .favorites
            .lock()
            .values()
            .filter(|f| &f.user_id == user_id)
            .cloned()
            .collect();
        favorites.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(favorites)
    }

    async fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<(), RepositoryError> {
        self.favorites
            .lock()
            .remove(&(user_id.clone(), product_id.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn test_category_round_trip() {
        let store = MemoryCategoryStore::default();
        let category = Category::new("Shoes", "Footwear");

        store.insert(&category).await.unwrap();
        let loaded = store.get_by_id(&category.id).await.unwrap();
        assert_eq!(loaded, Some(category));
    }

    #[tokio::test]
    async fn test_category_delete_is_idempotent() {
        let store = MemoryCategoryStore::default();
        let category = Category::new("Shoes", "Footwear");
        store.insert(&category).await.unwrap();

        store.delete(&category.id).await.unwrap();
        assert_eq!(store.get_by_id(&category.id).await.unwrap(), None);

        // Deleting again, and deleting something that never existed, both
        // succeed and change nothing.
        store.delete(&category.id).await.unwrap();
        store.delete(&CategoryId::new("missing-1")).await.unwrap();
        assert_eq!(store.get_by_id(&category.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_delete_and_get_observe_whole_records() {
        let store = Arc::new(MemoryCategoryStore::default());
        let category = Category::new("Shoes", "Footwear");
        store.insert(&category).await.unwrap();

        let deleter = Arc::clone(&store);
        let getter = Arc::clone(&store);
        let id = category.id.clone();
        let id_for_get = category.id.clone();

        let (deleted, got) = tokio::join!(
            tokio::spawn(async move { deleter.delete(&id).await }),
            tokio::spawn(async move { getter.get_by_id(&id_for_get).await }),
        );

        deleted.unwrap().unwrap();
        // The get sees the category before or after deletion, never a
        // partially-written record.
        match got.unwrap().unwrap() {
            Some(observed) => assert_eq!(observed, category),
            None => {}
        }
        assert_eq!(store.get_by_id(&category.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_address_composite_key_isolation() {
        let store = MemoryAddressStore::default();
        let mut a1 = Address::new(UserId::new("u1"), "1 Main St", "Lisbon", "PT");
        a1.address_id = AddressId::new("a1");
        let mut other = Address::new(UserId::new("u2"), "2 Side St", "Porto", "PT");
        other.address_id = AddressId::new("a1");

        store.insert(&a1).await.unwrap();
        store.insert(&other).await.unwrap();

        store
            .delete(&UserId::new("u1"), &AddressId::new("a1"))
            .await
            .unwrap();

        assert_eq!(
            store
                .get(&UserId::new("u1"), &AddressId::new("a1"))
                .await
                .unwrap(),
            None
        );
        // Same address_id under a different user is untouched.
        assert_eq!(
            store
                .get(&UserId::new("u2"), &AddressId::new("a1"))
                .await
                .unwrap(),
            Some(other)
        );
    }

    #[tokio::test]
    async fn test_favorite_uniqueness_per_user_product_pair() {
        let store = MemoryFavoriteStore::default();
        let first = UserFavorite::new(UserId::new("u1"), ProductId::new("p1"));
        let duplicate = UserFavorite::new(UserId::new("u1"), ProductId::new("p1"));

        store.add(&first).await.unwrap();
        store.add(&duplicate).await.unwrap();

        let favorites = store.list_for_user(&UserId::new("u1")).await.unwrap();
        assert_eq!(favorites.len(), 1);
        // The original record wins; the duplicate add was a no-op.
        assert_eq!(favorites.first().map(|f| f.id.clone()), Some(first.id));
    }

    #[tokio::test]
    async fn test_favorite_remove_converges_to_absence() {
        let store = MemoryFavoriteStore::default();
        let user = UserId::new("u1");
        let product = ProductId::new("p1");

        // Removing a favorite that does not exist is a no-op.
        store.remove(&user, &product).await.unwrap();

        store
            .add(&UserFavorite::new(user.clone(), product.clone()))
            .await
            .unwrap();
        store.remove(&user, &product).await.unwrap();

        assert!(store.list_for_user(&user).await.unwrap().is_empty());
    }
}
