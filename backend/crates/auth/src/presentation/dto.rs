//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Fields are optional so an absent field maps to the contract's 400
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

// ============================================================================
// Profile
// ============================================================================

/// Decoded identity echoed back to an authenticated caller
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
}

/// Profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub user: UserInfo,
}
