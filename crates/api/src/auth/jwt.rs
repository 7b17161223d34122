//! HS256 access tokens.
//!
//! A token that verifies is the caller's identity for its lifetime; requests
//! are not checked against the `users` table.

use std::fmt;

use crm_core::types::DbId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::env_or;

const DEFAULT_LIFETIME_MINS: i64 = 60;

/// Payload of every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: DbId,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
}

/// Signing secret and token lifetime.
#[derive(Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub lifetime_mins: i64,
}

impl fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("lifetime_mins", &self.lifetime_mins)
            .finish()
    }
}

impl TokenConfig {
    /// Reads `JWT_SECRET` (required) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60).
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            lifetime_mins: env_or("JWT_ACCESS_EXPIRY_MINS", DEFAULT_LIFETIME_MINS),
        }
    }

    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_mins * 60
    }

    /// Sign a fresh token for `user_id`.
    pub fn issue(&self, user_id: DbId) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.lifetime_secs(),
            jti: Uuid::new_v4(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> TokenConfig {
        TokenConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            lifetime_mins: 15,
        }
    }

    #[test]
    fn issued_token_verifies() {
        let user_id = Uuid::now_v7();
        let token = tokens().issue(user_id).unwrap();

        let claims = tokens().verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn each_token_gets_its_own_jti() {
        let user_id = Uuid::now_v7();
        let a = tokens().verify(&tokens().issue(user_id).unwrap()).unwrap();
        let b = tokens().verify(&tokens().issue(user_id).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::now_v7(),
            iat: now - 600,
            exp: now - 300,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(tokens().secret.as_bytes()),
        )
        .unwrap();

        assert!(tokens().verify(&token).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let other = TokenConfig {
            secret: "a-completely-different-secret".to_string(),
            lifetime_mins: 15,
        };
        let token = other.issue(Uuid::now_v7()).unwrap();

        assert!(tokens().verify(&token).is_err());
    }

    #[test]
    fn debug_output_hides_secret() {
        let rendered = format!("{:?}", tokens());
        assert!(!rendered.contains("test-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
