//! Category route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use clementine_core::CategoryId;

use crate::error::{ApiError, Result};
use crate::middleware::RequireAuth;
use crate::models::Category;
use crate::models::category::CreateCategoryInput;
use crate::ops::{CreateCategory, DeleteCategory, GetCategoryById, ListCategories};
use crate::state::AppState;

/// Create a category.
///
/// The identifier is generated here, via [`Category::new`], so the response
/// can carry it without a read-back.
///
/// # Errors
///
/// Returns 400 for a blank name, 500 for store failures.
#[instrument(skip(state, input))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(input): Json<CreateCategoryInput>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = Category::new(input.name, input.description);
    state
        .dispatcher()
        .execute(CreateCategory {
            category: category.clone(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// List all categories.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<Vec<Category>>> {
    let categories = state.dispatcher().query(ListCategories).await?;
    Ok(Json(categories))
}

/// Get a category by id.
///
/// # Errors
///
/// Returns 404 if no category matches. Absence only becomes an error here,
/// at the HTTP boundary; the query itself returns `None`.
#[instrument(skip(state))]
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<String>,
) -> Result<Json<Category>> {
    let id = CategoryId::new(id);
    let category = state
        .dispatcher()
        .query(GetCategoryById { id: id.clone() })
        .await?;
    category
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("category {id}")))
}

/// Delete a category.
///
/// Always 204: deleting a missing category is a successful no-op.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .dispatcher()
        .execute(DeleteCategory {
            id: CategoryId::new(id),
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
