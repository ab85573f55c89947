//! Application Layer
//!
//! One use case per file, plus the application configuration.

pub mod config;
pub mod login;
pub mod register;
pub mod verify_token;

// Re-exports
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use verify_token::{TokenIdentity, VerifyTokenUseCase};
