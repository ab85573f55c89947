//! Auth Middleware
//!
//! The bearer-token gate in front of protected routes. Verification is
//! stateless, so the middleware only needs the auth configuration, not a
//! repository.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer_token;

use crate::application::config::AuthConfig;
use crate::application::verify_token::VerifyTokenUseCase;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState {
    pub config: Arc<AuthConfig>,
}

/// Identity of the authenticated caller, stored in request extensions
/// for downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// Middleware that requires a valid bearer token
///
/// On success the decoded [`AuthenticatedUser`] is attached to the request;
/// on failure the request is rejected with 401 (no token) or 403 (bad
/// token) before reaching the handler.
pub async fn require_bearer_auth(
    State(state): State<AuthGateState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers());

    let use_case = VerifyTokenUseCase::new(state.config.clone());
    let identity = use_case.execute(token).map_err(|e| e.into_response())?;

    tracing::debug!(username = %identity.username, "Token verified");

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: identity.user_id,
        username: identity.username,
    });

    Ok(next.run(req).await)
}
