//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. All persistent entities are
//! keyed by database-assigned `AUTO_INCREMENT` integers, so the wrapper
//! carries an `i64` rather than a UUID.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ProductId = Id<markers::Product>;
/// let id = ProductId::from_i64(42);
/// assert_eq!(id.as_i64(), 42);
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create from a store-assigned integer
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying integer
    pub fn as_i64(&self) -> i64 {
        self.value
    }
}

// Manual impls so `T` does not need to implement these itself.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> std::str::FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::from_i64)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Product IDs
    pub struct Product;

    /// Marker for Category IDs
    pub struct Category;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type ProductId = Id<markers::Product>;
pub type CategoryId = Id<markers::Category>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let product_id: ProductId = Id::from_i64(1);
        let category_id: CategoryId = Id::from_i64(1);

        // These are different types, cannot be mixed
        let _p: i64 = product_id.into();
        let _c: i64 = category_id.into();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: ProductId = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_id_from_str() {
        let id: ProductId = "17".parse().unwrap();
        assert_eq!(id.as_i64(), 17);
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id: UserId = Id::from_i64(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
