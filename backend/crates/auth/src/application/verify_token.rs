//! Verify Token Use Case
//!
//! The gate in front of every protected operation. Stateless: the token
//! carries everything needed, nothing is looked up in the store.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Identity decoded from a valid token
#[derive(Debug, Clone)]
pub struct TokenIdentity {
    pub user_id: i64,
    pub username: String,
}

/// Verify token use case
pub struct VerifyTokenUseCase {
    config: Arc<AuthConfig>,
}

impl VerifyTokenUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Verify a bearer token taken from the Authorization header
    ///
    /// - `None` (no token supplied) fails with [`AuthError::MissingToken`]
    /// - A malformed, tampered, or expired token fails with
    ///   [`AuthError::InvalidToken`]
    pub fn execute(&self, token: Option<&str>) -> AuthResult<TokenIdentity> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let claims = self.config.signer().verify(token)?;
        let user_id = claims.user_id()?;

        Ok(TokenIdentity {
            user_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::with_random_secret())
    }

    #[test]
    fn test_accepts_issued_token() {
        let config = config();
        let token = config.signer().issue(7, "alice").unwrap();

        let identity = VerifyTokenUseCase::new(config).execute(Some(&token)).unwrap();
        assert_eq!(identity.user_id, 7);
        assert_eq!(identity.username, "alice");
    }

    #[test]
    fn test_missing_token() {
        let err = VerifyTokenUseCase::new(config()).execute(None).unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn test_rejects_foreign_token() {
        let token = config().signer().issue(7, "alice").unwrap();

        // Signed with a different secret
        let err = VerifyTokenUseCase::new(config())
            .execute(Some(&token))
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = VerifyTokenUseCase::new(config())
            .execute(Some("garbage"))
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
