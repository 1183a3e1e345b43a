//! Authentication error types.

use thiserror::Error;

/// Errors from bearer-token verification.
///
/// Every variant maps to a 401 at the HTTP boundary; the distinctions exist
/// for logging and tests, not for clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request.
    #[error("missing bearer token")]
    MissingToken,

    /// The token is not in the expected `payload.signature` shape or its
    /// claims do not parse.
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the configured key.
    #[error("invalid token signature")]
    InvalidSignature,

    /// The token's expiry is in the past.
    #[error("token expired")]
    Expired,

    /// The token was issued by a different authority.
    #[error("unexpected token issuer")]
    InvalidIssuer,

    /// The token is intended for a different audience.
    #[error("unexpected token audience")]
    InvalidAudience,

    /// The verifier itself could not be constructed from its key material.
    #[error("verifier misconfigured")]
    Misconfigured,
}
