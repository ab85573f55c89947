//! HTTP Handlers

use std::sync::Arc;

use axum::Extension;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse, UserInfo,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    // どちらかのフィールドが欠けていれば 400
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(AuthError::MissingCredentials),
    };

    let use_case = RegisterUseCase::new(state.repo.clone());
    use_case.execute(RegisterInput { username, password }).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(AuthError::MissingCredentials),
    };

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());
    let output = use_case.execute(LoginInput { username, password }).await?;

    Ok(Json(LoginResponse {
        token: output.token,
        username: output.username,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /api/auth/profile
///
/// Behind the bearer gate; the middleware has already attached the
/// decoded identity.
pub async fn profile(
    Extension(user): Extension<AuthenticatedUser>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user: UserInfo {
            user_id: user.user_id,
            username: user.username,
        },
    })
}
