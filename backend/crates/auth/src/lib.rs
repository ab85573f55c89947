//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with username + password
//! - Login issuing a signed 24-hour bearer token
//! - Stateless token verification gate for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Tokens are HS256-signed and carry `{userId, username}` claims
//! - Login does not distinguish unknown user from wrong password

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::mysql::MySqlAuthRepository;
pub use presentation::middleware::{AuthGateState, AuthenticatedUser, require_bearer_auth};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
