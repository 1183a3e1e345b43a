//! Favorite route handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use clementine_core::{ProductId, UserId};

use crate::error::Result;
use crate::middleware::RequireAuth;
use crate::ops::{AddFavorite, RemoveFavorite};
use crate::state::AppState;

/// Add a favorite. Idempotent: a pair that already exists is left as-is.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state
        .dispatcher()
        .execute(AddFavorite {
            user_id: UserId::new(user_id),
            product_id: ProductId::new(product_id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a favorite. Always 204; removing an absent pair is a no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path((user_id, product_id)): Path<(String, String)>,
) -> Result<StatusCode> {
    state
        .dispatcher()
        .execute(RemoveFavorite {
            user_id: UserId::new(user_id),
            product_id: ProductId::new(product_id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
