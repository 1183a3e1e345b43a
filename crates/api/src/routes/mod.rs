//! HTTP route handlers for the back-office API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                                      - Liveness check (no auth)
//! GET    /health/ready                                - Store reachability (no auth)
//!
//! # Categories
//! POST   /categories                                  - Create category
//! GET    /categories                                  - List categories
//! GET    /categories/{id}                             - Get category (404 if absent)
//! DELETE /categories/{id}                             - Delete category (204, idempotent)
//!
//! # Addresses
//! DELETE /users/{user_id}/addresses/{address_id}      - Delete address (204, idempotent)
//!
//! # Favorites
//! PUT    /users/{user_id}/favorites/{product_id}      - Add favorite (204, idempotent)
//! DELETE /users/{user_id}/favorites/{product_id}      - Remove favorite (204, idempotent)
//! ```
//!
//! All routes except `/health*` require a bearer token. Controllers only
//! construct a command/query, hand it to the dispatcher, and serialize the
//! result.

pub mod addresses;
pub mod categories;
pub mod favorites;
pub mod health;

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route(
            "/categories",
            post(categories::create).get(categories::list),
        )
        .route(
            "/categories/{id}",
            get(categories::get_by_id).delete(categories::delete),
        )
        .route(
            "/users/{user_id}/addresses/{address_id}",
            delete(addresses::delete),
        )
        .route(
            "/users/{user_id}/favorites/{product_id}",
            put(favorites::add).delete(favorites::remove),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-process router wired to in-memory stores, for route tests.

    use std::sync::Arc;

    use chrono::Duration;
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;

    use crate::config::{ApiConfig, AuthConfig};
    use crate::db::memory::{MemoryAddressStore, MemoryCategoryStore, MemoryFavoriteStore};
    use crate::ops::build_dispatcher;
    use crate::services::auth::HmacTokenVerifier;
    use crate::state::AppState;

    const TEST_SIGNING_KEY: &str = "kV9mX2qR7tY4wA8sD3fG6hJ1nB5cZ0pL";
    const TEST_ISSUER: &str = "https://auth.clementine.test";
    const TEST_AUDIENCE: &str = "clementine-api";

    pub(crate) fn test_router() -> axum::Router {
        let config = ApiConfig {
            database_url: SecretString::from("postgres://localhost/unused".to_string()),
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 0,
            auth: AuthConfig {
                signing_secret: SecretString::from(TEST_SIGNING_KEY.to_string()),
                issuer: TEST_ISSUER.to_owned(),
                audience: TEST_AUDIENCE.to_owned(),
            },
            sentry_dsn: None,
            sentry_environment: None,
        };

        // Lazy pool: never connects unless the readiness probe is exercised.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/unused")
            .expect("lazy pool");

        let dispatcher = build_dispatcher(
            Arc::new(MemoryCategoryStore::default()),
            Arc::new(MemoryAddressStore::default()),
            Arc::new(MemoryFavoriteStore::default()),
        )
        .expect("dispatcher wiring");

        let verifier = Arc::new(HmacTokenVerifier::new(
            SecretString::from(TEST_SIGNING_KEY.to_string()),
            TEST_ISSUER.to_owned(),
            TEST_AUDIENCE.to_owned(),
        ));

        super::router(AppState::new(config, pool, dispatcher, verifier))
    }

    pub(crate) fn bearer_token() -> String {
        let verifier = HmacTokenVerifier::new(
            SecretString::from(TEST_SIGNING_KEY.to_string()),
            TEST_ISSUER.to_owned(),
            TEST_AUDIENCE.to_owned(),
        );
        verifier
            .mint("tests@clementine.test", Duration::minutes(5))
            .expect("mint test token")
    }
}
