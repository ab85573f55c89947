//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use platform::token::TokenSigner;

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing
    pub token_secret: Vec<u8>,
    /// Token lifetime (fixed 24 hours in the default configuration)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
        }
    }
}

impl AuthConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config from an externally supplied secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Build a token signer for this configuration
    pub fn signer(&self) -> TokenSigner {
        TokenSigner::new(&self.token_secret, self.token_ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
