//! User favorite domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clementine_core::{FavoriteId, ProductId, UserId};

/// A product favorited by a user.
///
/// At most one favorite exists per (`user_id`, `product_id`) pair; the
/// store layer enforces this with a unique constraint, and adding a pair
/// that already exists is a no-op. `created_at` is set at construction and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFavorite {
    /// Unique favorite ID.
    pub id: FavoriteId,
    /// User who favorited the product. A lookup key into the user
    /// aggregate, not an ownership relation.
    pub user_id: UserId,
    /// The favorited product.
    pub product_id: ProductId,
    /// When the favorite was created.
    pub created_at: DateTime<Utc>,
}

impl UserFavorite {
    /// Create a new favorite, generating its ID and timestamp.
    #[must_use]
    pub fn new(user_id: UserId, product_id: ProductId) -> Self {
        Self {
            id: FavoriteId::generate(),
            user_id,
            product_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_keys_and_timestamp() {
        let favorite = UserFavorite::new(UserId::new("u1"), ProductId::new("p1"));
        assert_eq!(favorite.user_id.as_str(), "u1");
        assert_eq!(favorite.product_id.as_str(), "p1");
        assert!(favorite.created_at <= Utc::now());
    }
}
