//! Bearer-token verification.
//!
//! The API trusts an external identity provider to issue tokens; this module
//! only checks that a presented token is genuine. [`TokenVerifier`] is the
//! seam: the rest of the crate never sees key material, and tests can swap
//! in their own verifier.
//!
//! The concrete implementation, [`HmacTokenVerifier`], verifies compact
//! `payload.signature` tokens: a base64url-encoded JSON claims object signed
//! with HMAC-SHA256. Signature, expiry, issuer, and audience are all checked
//! against configured values. `mint` exists for the CLI and tests; the
//! production issuer is external.

pub mod error;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

pub use error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a verified token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated principal.
    pub sub: String,
    /// Issuer: the authority that minted the token.
    pub iss: String,
    /// Audience the token is intended for.
    pub aud: String,
    /// Expiry as a unix timestamp (seconds).
    pub exp: i64,
}

/// Validates a bearer token and yields the authenticated principal's claims.
pub trait TokenVerifier: Send + Sync {
    /// Verify `token` and return its claims.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] describing why the token was rejected.
    fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

/// HMAC-SHA256 token verifier bound to a configured issuer and audience.
pub struct HmacTokenVerifier {
    key: SecretString,
    issuer: String,
    audience: String,
}

impl HmacTokenVerifier {
    /// Create a verifier from the shared signing secret and the expected
    /// issuer/audience pair.
    #[must_use]
    pub const fn new(key: SecretString, issuer: String, audience: String) -> Self {
        Self {
            key,
            issuer,
            audience,
        }
    }

    fn mac(&self) -> Result<HmacSha256, AuthError> {
        HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .map_err(|_| AuthError::Misconfigured)
    }

    /// Sign an arbitrary claims object. Exposed for the CLI `token` command
    /// and for tests that need tokens with off-nominal claims.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Misconfigured`] if the key material is unusable.
    pub fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        let payload = serde_json::to_vec(claims).map_err(|_| AuthError::Misconfigured)?;
        let payload_b64 = URL_SAFE_NO_PAD.encode(payload);

        let mut mac = self.mac()?;
        mac.update(payload_b64.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload_b64}.{signature}"))
    }

    /// Mint a token for `subject` with the configured issuer and audience.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Misconfigured`] if the key material is unusable.
    pub fn mint(&self, subject: &str, ttl: Duration) -> Result<String, AuthError> {
        self.sign(&Claims {
            sub: subject.to_owned(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            exp: (Utc::now() + ttl).timestamp(),
        })
    }
}

impl TokenVerifier for HmacTokenVerifier {
    fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let (payload_b64, signature_b64) = token.split_once('.').ok_or(AuthError::Malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::Malformed)?;

        // Check the signature before trusting anything inside the payload.
        let mut mac = self.mac()?;
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidSignature)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::Malformed)?;
        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| AuthError::Malformed)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::Expired);
        }
        if claims.iss != self.issuer {
            return Err(AuthError::InvalidIssuer);
        }
        if claims.aud != self.audience {
            return Err(AuthError::InvalidAudience);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> HmacTokenVerifier {
        HmacTokenVerifier::new(
            SecretString::from("0123456789abcdef0123456789abcdef".to_string()),
            "https://auth.clementine.dev".to_owned(),
            "clementine-api".to_owned(),
        )
    }

    #[test]
    fn test_mint_then_verify_round_trips_claims() {
        let v = verifier();
        let token = v.mint("admin@clementine.dev", Duration::minutes(5)).expect("mint");

        let claims = v.verify(&token).expect("verify");
        assert_eq!(claims.sub, "admin@clementine.dev");
        assert_eq!(claims.aud, "clementine-api");
    }

    #[test]
    fn test_tampered_payload_fails_signature_check() {
        let v = verifier();
        let token = v.mint("admin", Duration::minutes(5)).expect("mint");
        let (_, signature) = token.split_once('.').expect("shape");

        let forged_payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Claims {
                sub: "attacker".to_owned(),
                iss: "https://auth.clementine.dev".to_owned(),
                aud: "clementine-api".to_owned(),
                exp: i64::MAX,
            })
            .expect("serialize"),
        );

        let err = v
            .verify(&format!("{forged_payload}.{signature}"))
            .expect_err("forged");
        assert_eq!(err, AuthError::InvalidSignature);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let v = verifier();
        let token = v.mint("admin", Duration::minutes(-5)).expect("mint");
        assert_eq!(v.verify(&token).expect_err("expired"), AuthError::Expired);
    }

    #[test]
    fn test_wrong_audience_and_issuer_are_rejected() {
        let v = verifier();
        let exp = (Utc::now() + Duration::minutes(5)).timestamp();

        let wrong_aud = v
            .sign(&Claims {
                sub: "admin".to_owned(),
                iss: "https://auth.clementine.dev".to_owned(),
                aud: "someone-else".to_owned(),
                exp,
            })
            .expect("sign");
        assert_eq!(
            v.verify(&wrong_aud).expect_err("audience"),
            AuthError::InvalidAudience
        );

        let wrong_iss = v
            .sign(&Claims {
                sub: "admin".to_owned(),
                iss: "https://rogue.example".to_owned(),
                aud: "clementine-api".to_owned(),
                exp,
            })
            .expect("sign");
        assert_eq!(
            v.verify(&wrong_iss).expect_err("issuer"),
            AuthError::InvalidIssuer
        );
    }

    #[test]
    fn test_garbage_tokens_are_malformed() {
        let v = verifier();
        assert_eq!(v.verify("not-a-token").expect_err("no dot"), AuthError::Malformed);
        assert_eq!(
            v.verify("!!!.###").expect_err("bad base64"),
            AuthError::Malformed
        );
    }
}
