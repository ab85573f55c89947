//! User Password Value Object
//!
//! Domain wrapper for user passwords. Delegates the cryptographic work to
//! `platform::password` (Argon2id, zeroization, NFKC normalization).

use std::fmt;

use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};

use crate::error::{AuthError, AuthResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with auth-domain error mapping.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password with validation
    pub fn new(raw: String) -> AuthResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            // An all-whitespace password and an absent one read the same
            // to the caller
            PasswordPolicyError::EmptyOrWhitespace => AuthError::MissingCredentials,
            other => AuthError::Validation(other.to_string()),
        })?;

        Ok(Self(clear_text))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores the password in Argon2id PHC string format. Safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    pub fn from_raw(raw: &RawPassword) -> AuthResult<Self> {
        let hashed = raw
            .inner()
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AuthResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AuthError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> AuthResult<bool> {
        self.0
            .verify(raw.inner())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let raw = RawPassword::new("hunter2hunter2".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();

        assert!(hashed.verify(&raw).unwrap());

        let wrong = RawPassword::new("not the password".to_string()).unwrap();
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_empty_password_is_missing_credentials() {
        assert!(matches!(
            RawPassword::new("".to_string()).unwrap_err(),
            AuthError::MissingCredentials
        ));
    }

    #[test]
    fn test_phc_roundtrip() {
        let raw = RawPassword::new("roundtrip".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&raw).unwrap());
    }
}
