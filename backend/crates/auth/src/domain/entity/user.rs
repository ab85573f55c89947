//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// User entity
///
/// A registered account. The id is assigned by the store on creation;
/// users are never deleted or renamed through any exposed operation.
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned identifier
    pub id: UserId,
    /// User name (unique, for login and display)
    pub username: UserName,
    /// Argon2id hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}
