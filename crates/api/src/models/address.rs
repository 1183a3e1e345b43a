//! User address domain model.

use serde::{Deserialize, Serialize};

use clementine_core::{AddressId, UserId};

/// A shipping/billing address owned by a user.
///
/// Addresses are identified by the composite key (`user_id`, `address_id`):
/// the same `address_id` value under a different user is a different
/// address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Owning user.
    pub user_id: UserId,
    /// Address ID, unique per user.
    pub address_id: AddressId,
    /// Street line.
    pub line1: String,
    /// City.
    pub city: String,
    /// ISO country code.
    pub country: String,
}

impl Address {
    /// Create a new address for a user with a freshly generated address ID.
    #[must_use]
    pub fn new(
        user_id: UserId,
        line1: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            address_id: AddressId::generate(),
            line1: line1.into(),
            city: city.into(),
            country: country.into(),
        }
    }
}
