//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p clementine-cli -- migrate
//!
//! # Start the API
//! cargo run -p clementine-api
//!
//! # Mint a token and run the ignored tests
//! export CLEMENTINE_TEST_TOKEN=$(cargo run -p clementine-cli -- token)
//! cargo test -p clementine-integration-tests -- --ignored
//! ```
//!
//! Tests are `#[ignore]`d by default because they need a running server,
//! a migrated database, and a valid bearer token in the environment.

use reqwest::Client;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("CLEMENTINE_API_URL").unwrap_or_else(|_| "http://localhost:4000".to_string())
}

/// Bearer token used for authenticated requests.
///
/// # Panics
///
/// Panics if `CLEMENTINE_TEST_TOKEN` is not set; the ignored tests cannot
/// run without it.
#[must_use]
pub fn bearer_token() -> String {
    std::env::var("CLEMENTINE_TEST_TOKEN")
        .expect("CLEMENTINE_TEST_TOKEN must be set (mint one with `clem token`)")
}

/// Create an HTTP client for the tests.
#[must_use]
pub fn client() -> Client {
    Client::builder().build().expect("Failed to create HTTP client")
}
