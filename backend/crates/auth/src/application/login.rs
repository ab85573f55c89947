//! Login Use Case
//!
//! Authenticates a user and issues a signed bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed bearer token, valid for the configured TTL
    pub token: String,
    /// The authenticated user name, echoed back to the client
    pub username: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Presence validation happens before any lookup so a blank field is
        // a 400 whether or not the username exists.
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::MissingCredentials)?;

        let raw_password = RawPassword::new(input.password).map_err(|e| match e {
            // Absent password is a validation failure, not a bad credential
            AuthError::MissingCredentials => AuthError::MissingCredentials,
            _ => AuthError::InvalidCredentials,
        })?;

        // From here on every failure collapses to InvalidCredentials so an
        // unknown user and a wrong password are indistinguishable.
        let user = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password_valid = user.password_hash.verify(&raw_password)?;
        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .config
            .signer()
            .issue(user.id.as_i64(), user.username.as_str())?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginOutput {
            token,
            username: user.username.as_str().to_string(),
        })
    }
}
