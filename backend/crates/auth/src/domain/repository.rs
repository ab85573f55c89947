//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user; the store assigns the id
    async fn create(
        &self,
        username: &UserName,
        password_hash: &UserPassword,
    ) -> AuthResult<UserId>;

    /// Find user by user name (exact match)
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool>;
}
