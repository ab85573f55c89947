//! Signed Bearer Tokens
//!
//! Stateless HS256-signed tokens proving a successful login. The token
//! embeds the user id and user name plus issued-at/expiry timestamps;
//! nothing is persisted server-side.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token is malformed or the signature does not verify
    #[error("Invalid token")]
    Invalid,

    /// Signing failed (key or serialization problem)
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Claims carried by a signed token
///
/// `sub` holds the user id in decimal form, per JWT convention of a
/// string subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse::<i64>().map_err(|_| TokenError::Invalid)
    }
}

/// Issues and verifies signed tokens with a shared secret
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenSigner {
    /// Create a signer from a shared secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is exact; no clock-skew grace period
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issue a token for the given user, expiring after the configured TTL
    pub fn issue(&self, user_id: i64, username: &str) -> Result<String, TokenError> {
        let now = unix_now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now,
            exp: now + self.ttl.as_secs() as i64,
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token and return its claims
    ///
    /// Expired tokens are reported separately from malformed or
    /// wrongly-signed ones so callers can log them apart, but both are
    /// rejections.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
