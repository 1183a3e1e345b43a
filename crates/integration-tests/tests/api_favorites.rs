//! Integration tests for favorite and address endpoints.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The API server running (cargo run -p clementine-api)
//! - A valid bearer token in `CLEMENTINE_TEST_TOKEN`

use reqwest::StatusCode;

use clementine_integration_tests::{api_base_url, bearer_token, client};

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_favorite_add_and_remove_are_idempotent() {
    let base_url = api_base_url();
    let token = bearer_token();
    let client = client();
    let url = format!("{base_url}/users/it-u1/favorites/it-p1");

    // Adding twice stores one record and both calls succeed.
    for _ in 0..2 {
        let resp = client
            .put(&url)
            .bearer_auth(&token)
            .send()
            .await
            .expect("add");
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    // Removing twice also succeeds; the second call is a no-op.
    for _ in 0..2 {
        let resp = client
            .delete(&url)
            .bearer_auth(&token)
            .send()
            .await
            .expect("remove");
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

#[tokio::test]
#[ignore = "Requires running API server and database"]
async fn test_address_delete_is_scoped_and_idempotent() {
    let base_url = api_base_url();
    let token = bearer_token();
    let client = client();

    // Deleting an address that does not exist converges to absence.
    let resp = client
        .delete(format!("{base_url}/users/it-u1/addresses/it-a1"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("delete");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
