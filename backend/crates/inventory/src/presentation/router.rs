//! Inventory Router
//!
//! The whole router is mounted behind the bearer gate by the app; no
//! route here is public.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::infra::mysql::MySqlInventoryRepository;
use crate::presentation::handlers::{self, InventoryAppState};

/// Create the inventory router with the MySQL repository
pub fn inventory_router(repo: MySqlInventoryRepository) -> Router {
    inventory_router_generic(repo)
}

/// Create a generic inventory router for any repository implementation
pub fn inventory_router_generic<R>(repo: R) -> Router
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let state = InventoryAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_products::<R>)
                .post(handlers::create_product::<R>)
                .delete(handlers::reset_inventory::<R>),
        )
        .route(
            "/{id}",
            put(handlers::update_product::<R>).delete(handlers::delete_product::<R>),
        )
        .route("/category/add", post(handlers::add_category::<R>))
        .route("/categories/list", get(handlers::list_categories::<R>))
        .with_state(state)
}
