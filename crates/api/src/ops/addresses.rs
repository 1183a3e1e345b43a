//! Address operations.

use std::sync::Arc;

use async_trait::async_trait;

use clementine_core::{AddressId, UserId};

use crate::db::AddressStore;
use crate::dispatch::{Command, CommandHandler};
use crate::error::ApiError;

/// Remove the address matching the composite key (`user_id`, `address_id`).
/// No-op if absent; never touches an identical `address_id` under another
/// user.
#[derive(Debug)]
pub struct DeleteAddress {
    /// Owning user.
    pub user_id: UserId,
    /// Address to delete, scoped to that user.
    pub address_id: AddressId,
}

impl Command for DeleteAddress {}

/// Handler for [`DeleteAddress`].
pub struct DeleteAddressHandler {
    addresses: Arc<dyn AddressStore>,
}

impl DeleteAddressHandler {
    pub fn new(addresses: Arc<dyn AddressStore>) -> Self {
        Self { addresses }
    }
}

#[async_trait]
impl CommandHandler<DeleteAddress> for DeleteAddressHandler {
    async fn handle(&self, cmd: DeleteAddress) -> Result<(), ApiError> {
        self.addresses.delete(&cmd.user_id, &cmd.address_id).await?;
        Ok(())
    }
}
