//! API Server Entry Point
//!
//! Application entry point and server initialization. Uses `anyhow` for
//! startup errors; request-path errors are handled inside the domain
//! crates.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::{AuthConfig, AuthGateState, MySqlAuthRepository, auth_router, require_bearer_auth};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use base64::Engine;
use base64::engine::general_purpose;
use inventory::{MySqlInventoryRepository, inventory_router};
use sqlx::mysql::MySqlPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,inventory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = MySqlPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing configuration
    let auth_config = if cfg!(debug_assertions) {
        // Random per-process secret; restarting invalidates outstanding tokens
        AuthConfig::with_random_secret()
    } else {
        // In production, load secret from environment
        let secret_b64 = env::var("JWT_SECRET").expect("JWT_SECRET must be set in production");
        let secret = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(secret.len() >= 32, "JWT_SECRET must decode to at least 32 bytes");
        AuthConfig::with_secret(secret)
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // The inventory API sits entirely behind the bearer gate
    let gate = AuthGateState {
        config: Arc::new(auth_config.clone()),
    };
    let protected_inventory = inventory_router(MySqlInventoryRepository::new(pool.clone()))
        .layer(middleware::from_fn_with_state(gate, require_bearer_auth));

    // Build router
    let app = Router::new()
        .nest("/api/auth", auth_router(MySqlAuthRepository::new(pool), auth_config))
        .nest("/api/products", protected_inventory)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
