//! Mint a development bearer token.
//!
//! Uses the same signing secret, issuer, and audience the API verifies
//! against, so the minted token works immediately against a local server.

use chrono::Duration;
use secrecy::SecretString;
use tracing::info;

use clementine_api::services::auth::HmacTokenVerifier;

use super::MissingEnvVar;

/// Mint a token for `subject`, valid for `ttl_minutes`, and print it.
///
/// # Errors
///
/// Returns an error if the `CLEMENTINE_AUTH_*` variables are missing or the
/// signing key is unusable.
pub fn mint(subject: &str, ttl_minutes: i64) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let secret = std::env::var("CLEMENTINE_AUTH_SECRET")
        .map(SecretString::from)
        .map_err(|_| MissingEnvVar("CLEMENTINE_AUTH_SECRET"))?;
    let issuer =
        std::env::var("CLEMENTINE_AUTH_ISSUER").map_err(|_| MissingEnvVar("CLEMENTINE_AUTH_ISSUER"))?;
    let audience = std::env::var("CLEMENTINE_AUTH_AUDIENCE")
        .map_err(|_| MissingEnvVar("CLEMENTINE_AUTH_AUDIENCE"))?;

    let verifier = HmacTokenVerifier::new(secret, issuer, audience);
    let token = verifier.mint(subject, Duration::minutes(ttl_minutes))?;

    info!(subject, ttl_minutes, "Minted development token");
    // The token itself goes to stdout so it can be piped into curl/env vars.
    #[allow(clippy::print_stdout)]
    {
        println!("{token}");
    }
    Ok(())
}
