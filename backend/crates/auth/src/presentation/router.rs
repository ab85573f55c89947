//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::mysql::MySqlAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthGateState, require_bearer_auth};

/// Create the Auth router with the MySQL repository
pub fn auth_router(repo: MySqlAuthRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `/register` and `/login` are open; `/profile` sits behind the bearer
/// gate.
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AuthAppState {
        repo: Arc::new(repo),
        config: config.clone(),
    };
    let gate = AuthGateState { config };

    Router::new()
        .route(
            "/profile",
            get(handlers::profile)
                .route_layer(middleware::from_fn_with_state(gate, require_bearer_auth)),
        )
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
