//! User Name Value Object
//!
//! ユーザー名は、ユーザーを識別するための公開識別子（ハンドル）。
//! ログインと画面表示に使用される。
//!
//! ## 設計方針
//! - NFKC正規化 → トリム → 検証 の順で処理
//! - 大文字小文字は保持する（一意性は保存層の完全一致）
//!
//! ## 不変条件
//! - 空でないこと（トリム後）
//! - 長さ: 最大64文字（正規化後）
//! - 制御文字を含まないこと

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 64;

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    /// Empty after normalization and trimming
    #[error("Username cannot be empty")]
    Empty,

    /// Longer than [`USER_NAME_MAX_LENGTH`]
    #[error("Username must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Contains control characters
    #[error("Username contains invalid characters")]
    InvalidCharacter,
}

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Create a validated user name
    ///
    /// Input is NFKC-normalized and trimmed before validation.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(UserNameError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                max: USER_NAME_MAX_LENGTH,
                actual: char_count,
            });
        }

        if trimmed.chars().any(|ch| ch.is_control()) {
            return Err(UserNameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the user name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        assert_eq!(UserName::new("alice").unwrap().as_str(), "alice");
        assert_eq!(UserName::new("Alice.W-99").unwrap().as_str(), "Alice.W-99");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(UserName::new("  bob  ").unwrap().as_str(), "bob");
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
        assert_eq!(UserName::new("   ").unwrap_err(), UserNameError::Empty);
    }

    #[test]
    fn test_rejects_too_long() {
        let raw = "x".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(matches!(
            UserName::new(raw).unwrap_err(),
            UserNameError::TooLong { .. }
        ));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(
            UserName::new("ali\u{0007}ce").unwrap_err(),
            UserNameError::InvalidCharacter
        );
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width letters normalize to ASCII
        assert_eq!(UserName::new("ａｌｉｃｅ").unwrap().as_str(), "alice");
    }
}
