//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs signed with the configured secret. The `sub` claim carries
//! the user's ID as a string, `iat`/`exp` are Unix timestamps in seconds.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Default token lifetime when none is configured.
pub const DEFAULT_EXPIRES_IN_SECONDS: i64 = 15 * 60;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID the token was issued to.
    pub sub: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: Duration,
}

impl JwtKeys {
    /// Creates keys from the HS256 secret and token lifetime.
    ///
    /// # Arguments
    /// - `secret` - Shared signing secret (`JWT_SECRET_KEY`)
    /// - `expires_in_seconds` - Lifetime of issued tokens
    pub fn new(secret: &str, expires_in_seconds: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expires_in: Duration::seconds(expires_in_seconds),
        }
    }

    /// Issues a signed token for the given user.
    pub fn issue(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expires_in).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verifies signature and expiry, returning the token's claims.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;

        Ok(data.claims)
    }
}
