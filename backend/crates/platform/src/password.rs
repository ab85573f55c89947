//! Password Hashing and Verification
//!
//! Argon2id-based password handling with:
//! - Zeroization of sensitive data
//! - Unicode NFKC normalization before hashing
//! - PHC string format for storage
//!
//! The policy is intentionally permissive: the account contract only
//! requires that a password be present, so validation rejects empty or
//! control-character input and caps the length, nothing more.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in characters (NIST: SHOULD permit at least 64)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains only whitespace
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password contains invalid characters (control characters)
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// This type ensures that password data is securely erased from memory
/// when the value is dropped, preventing memory inspection attacks.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password with validation
    ///
    /// Unicode is normalized using NFKC before validation.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        // Unicode NFKC normalization before processing
        let normalized: String = raw.nfkc().collect();

        // Check for empty or whitespace-only
        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count Unicode code points, not bytes
        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        // Check for control characters (except space, tab, newline)
        for ch in normalized.chars() {
            if ch.is_control() && ch != ' ' && ch != '\t' && ch != '\n' {
                return Err(PasswordPolicyError::InvalidCharacter);
            }
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        // Random salt, 128 bits
        let salt = SaltString::generate(OsRng);

        // Argon2id with the crate defaults (OWASP recommended:
        // m=19456 KiB, t=2, p=1)
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// Stores the Argon2id hash in PHC format, which includes the algorithm
/// identifier, version, parameters, salt, and hash. Safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // Validate the format eagerly so a corrupt database value fails
        // at load time, not at verification time.
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a clear text password against this hash
    ///
    /// Argon2 verification is constant-time with respect to the hash.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&self.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("correct horse battery staple".to_string()).unwrap();
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password).unwrap());

        let wrong = ClearTextPassword::new("wrong password".to_string()).unwrap();
        assert!(!hashed.verify(&wrong).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let password = ClearTextPassword::new("same password".to_string()).unwrap();
        let a = password.hash().unwrap();
        let b = password.hash().unwrap();
        assert_ne!(a.as_phc_string(), b.as_phc_string());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(
            ClearTextPassword::new("".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            ClearTextPassword::new("   ".to_string()).unwrap_err(),
            PasswordPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            ClearTextPassword::new("pass\u{0000}word".to_string()).unwrap_err(),
            PasswordPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_rejects_too_long() {
        let raw = "x".repeat(MAX_PASSWORD_LENGTH + 1);
        assert!(matches!(
            ClearTextPassword::new(raw).unwrap_err(),
            PasswordPolicyError::TooLong { .. }
        ));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width and half-width forms normalize to the same password
        let a = ClearTextPassword::new("ｐａｓｓｗｏｒｄ１".to_string()).unwrap();
        let b = ClearTextPassword::new("password1".to_string()).unwrap();
        let hashed = a.hash().unwrap();
        assert!(hashed.verify(&b).unwrap());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let password = ClearTextPassword::new("roundtrip".to_string()).unwrap();
        let hashed = password.hash().unwrap();
        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&password).unwrap());
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(matches!(
            HashedPassword::from_phc_string("not-a-phc-string").unwrap_err(),
            PasswordHashError::InvalidHashFormat
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = ClearTextPassword::new("topsecret".to_string()).unwrap();
        assert!(!format!("{:?}", password).contains("topsecret"));
    }
}
