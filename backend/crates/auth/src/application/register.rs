//! Register Use Case
//!
//! Creates a new user account. No token is issued; the caller must log in
//! separately.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub username: String,
    pub password: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate user name
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::MissingCredentials)?;

        // Check if user name is taken. The store's unique index still backs
        // this up if two registrations race.
        if self.user_repo.exists_by_username(&username).await? {
            return Err(AuthError::UserNameTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)?;
        let password_hash = UserPassword::from_raw(&raw_password)?;

        // Persist
        let user_id = self.user_repo.create(&username, &password_hash).await?;

        tracing::info!(
            user_id = %user_id,
            username = %username,
            "User registered"
        );

        Ok(RegisterOutput { user_id })
    }
}
