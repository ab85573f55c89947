//! Category Name Value Object
//!
//! 登録時に前後の空白を取り除き、空文字列を拒否します。
//! 大文字小文字はそのまま保持します（一意性判定は DB の照合順序に従う）。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{InventoryError, InventoryResult};

/// カテゴリ名（トリム済み、非空）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// 入力文字列をトリムして検証
    pub fn new(raw: impl AsRef<str>) -> InventoryResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InventoryError::CategoryNameRequired);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
