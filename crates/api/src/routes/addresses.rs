//! Address route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use clementine_core::{AddressId, UserId};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::ops::DeleteAddress;
use crate::state::AppState;

/// Delete an address scoped to its owning user.
///
/// Always 204: deleting a missing address is a successful no-op, and an
/// identical `address_id` under a different user is never touched.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path((user_id, address_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state
        .dispatcher()
        .execute(DeleteAddress {
            user_id: UserId::new(user_id),
            address_id: AddressId::new(address_id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
