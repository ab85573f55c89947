//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Status mapping follows the observed API contract: duplicate usernames
//! are a 400 (not 409), a missing token is a 401, and a present but
//! invalid or expired token is a 403.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request is missing username or password
    #[error("Username and password are required")]
    MissingCredentials,

    /// User name already exists
    #[error("Username already exists")]
    UserNameTaken,

    /// Invalid credentials (unknown user or wrong password, deliberately
    /// indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Authentication required")]
    MissingToken,

    /// Token is malformed, tampered with, or expired
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Input validation error
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            // The contract reports duplicates as a plain bad request
            AuthError::MissingCredentials
            | AuthError::UserNameTaken
            | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials | AuthError::MissingToken => ErrorKind::Unauthorized,
            AuthError::InvalidToken => ErrorKind::Forbidden,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server errors get a fixed generic message; detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid or expired token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        match err {
            platform::token::TokenError::Expired | platform::token::TokenError::Invalid => {
                AuthError::InvalidToken
            }
            platform::token::TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}
