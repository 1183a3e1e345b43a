//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server errors to Sentry
//! before responding to the client. All route handlers and request handlers
//! return `Result<T, ApiError>`.
//!
//! Two outcomes deliberately do NOT pass through here:
//!
//! - Absence: queries return `Option` and deletes are idempotent no-ops, so
//!   a missing entity only becomes [`ApiError::NotFound`] at the HTTP
//!   boundary, where a `GET` needs a 404.
//! - Cancellation: a client that disconnects drops the request future; an
//!   abandoned request is not an application error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::dispatch::DispatchError;
use crate::services::auth::AuthError;

/// Application-level error type for the back-office API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Store operation failed (connectivity, timeout, corrupt data). No
    /// automatic retry; surfaces as a 500.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Dispatcher could not resolve a handler. Unreachable after startup
    /// wiring; surfaces as a 500 if it ever happens.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Bearer-token verification failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Database(_) | Self::Dispatch(_) | Self::Internal(_)
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Dispatch(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Dispatch(_) | Self::Internal(_) => {
                "internal server error".to_owned()
            }
            Self::Auth(_) => "unauthorized".to_owned(),
            Self::NotFound(what) => format!("not found: {what}"),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(ApiError::NotFound("category cat-1".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::BadRequest("bad".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Auth(AuthError::MissingToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(ApiError::Dispatch(DispatchError::NotRegistered("X"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let response = ApiError::Internal("connection string postgres://...".to_owned())
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Body is a generic message; detail stays in logs/Sentry.
    }
}
