//! Token Issuer / Verifier
//!
//! Stateless bearer credentials: a base64url JSON claims payload signed
//! with HMAC-SHA256 under a process-wide secret. Verification checks the
//! signature before touching the payload, then the expiry.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::config::AuthConfig;

/// Claims embedded in a signed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Admin record identifier
    pub admin_id: Uuid,
    /// Admin username at issuance time
    pub username: String,
    /// Issued-at (Unix seconds)
    pub iat: i64,
    /// Expiry (Unix seconds)
    pub exp: i64,
}

/// Token verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Not two dot-separated base64url parts, or undecodable payload
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the payload
    #[error("Invalid token signature")]
    BadSignature,

    /// Token expiry is in the past
    #[error("Token expired")]
    Expired,
}

/// Signs and verifies compact bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    secret: Vec<u8>,
    ttl_secs: i64,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: std::time::Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: ttl.as_secs() as i64,
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.token_secret.clone(), config.token_ttl)
    }

    /// Sign a token for the given admin, valid for the configured TTL
    pub fn sign(&self, admin_id: Uuid, username: &str) -> String {
        let now = Utc::now().timestamp();
        self.sign_claims(&Claims {
            admin_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        })
    }

    /// Sign explicit claims (expiry included); used by `sign` and by tests
    pub fn sign_claims(&self, claims: &Claims) -> String {
        let payload =
            serde_json::to_vec(claims).expect("Claims serialization cannot fail");
        let payload_b64 = platform::crypto::to_base64url(&payload);
        let signature = platform::crypto::hmac_sha256(&self.secret, payload_b64.as_bytes());

        format!(
            "{}.{}",
            payload_b64,
            platform::crypto::to_base64url(&signature)
        )
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let (payload_b64, signature_b64) =
            token.split_once('.').ok_or(TokenError::Malformed)?;

        let signature = platform::crypto::from_base64url(signature_b64)
            .map_err(|_| TokenError::Malformed)?;

        if !platform::crypto::hmac_sha256_verify(&self.secret, payload_b64.as_bytes(), &signature)
        {
            return Err(TokenError::BadSignature);
        }

        let payload = platform::crypto::from_base64url(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

/// Parse an `Authorization: Bearer <token>` header value
///
/// Returns `None` when the header is absent-shaped or malformed; never errors.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(platform::crypto::random_bytes(32), Duration::from_secs(7 * 24 * 3600))
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let issuer = issuer();
        let admin_id = Uuid::new_v4();

        let token = issuer.sign(admin_id, "admin");
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.admin_id, admin_id);
        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().sign(Uuid::new_v4(), "admin");
        let other = issuer();
        assert_eq!(other.verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let issuer = issuer();
        let token = issuer.sign(Uuid::new_v4(), "admin");
        let (payload, sig) = token.split_once('.').unwrap();

        // Forge a different payload while keeping the signature
        let mut forged_payload = payload.to_string();
        forged_payload.push('x');
        let forged = format!("{forged_payload}.{sig}");
        assert_eq!(issuer.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let now = Utc::now().timestamp();
        let token = issuer.sign_claims(&Claims {
            admin_id: Uuid::new_v4(),
            username: "admin".to_string(),
            iat: now - 8 * 24 * 3600,
            exp: now - 24 * 3600,
        });
        assert_eq!(issuer.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let issuer = issuer();
        assert_eq!(issuer.verify(""), Err(TokenError::Malformed));
        assert_eq!(issuer.verify("no-dot-here"), Err(TokenError::Malformed));
        assert_eq!(issuer.verify("a.!!!not-base64!!!"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer("Bearer abc.def"), Some("abc.def"));
        assert_eq!(extract_bearer("Bearer   spaced  "), Some("spaced"));
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("bearer abc"), None);
        assert_eq!(extract_bearer("Basic abc"), None);
        assert_eq!(extract_bearer(""), None);
    }
}
