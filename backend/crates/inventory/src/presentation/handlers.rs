//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::id::ProductId;

use crate::application::{
    AddCategoryInput, AddCategoryUseCase, CreateProductInput, CreateProductUseCase,
    DeleteProductInput, DeleteProductUseCase, ListCategoriesUseCase, ListProductsUseCase,
    ResetInventoryUseCase, UpdateProductInput, UpdateProductUseCase,
};
use crate::domain::repository::{CategoryRepository, ProductRepository};
use crate::error::InventoryResult;
use crate::presentation::dto::{
    AddCategoryRequest, AddCategoryResponse, CreateProductResponse, MessageResponse,
    ProductRequest, ProductResponse,
};

/// Shared state for inventory handlers
#[derive(Clone)]
pub struct InventoryAppState<R>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Products
// ============================================================================

/// GET /api/products
pub async fn list_products<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /api/products
pub async fn create_product<R>(
    State(state): State<InventoryAppState<R>>,
    Json(req): Json<ProductRequest>,
) -> InventoryResult<impl IntoResponse>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let output = CreateProductUseCase::new(state.repo.clone())
        .execute(CreateProductInput {
            name: req.name,
            category: req.category,
            quantity: req.quantity,
            price: req.price,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            message: "Product added successfully".to_string(),
            product_id: output.product_id.as_i64(),
        }),
    ))
}

/// PUT /api/products/{id}
pub async fn update_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<i64>,
    Json(req): Json<ProductRequest>,
) -> InventoryResult<Json<MessageResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    UpdateProductUseCase::new(state.repo.clone())
        .execute(UpdateProductInput {
            id: ProductId::from_i64(id),
            name: req.name,
            category: req.category,
            quantity: req.quantity,
            price: req.price,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Product updated successfully".to_string(),
    }))
}

/// DELETE /api/products/{id}
pub async fn delete_product<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<i64>,
) -> InventoryResult<Json<MessageResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    DeleteProductUseCase::new(state.repo.clone())
        .execute(DeleteProductInput {
            id: ProductId::from_i64(id),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}

/// DELETE /api/products
pub async fn reset_inventory<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<MessageResponse>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    ResetInventoryUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(MessageResponse {
        message: "All products deleted successfully".to_string(),
    }))
}

// ============================================================================
// Categories
// ============================================================================

/// POST /api/products/category/add
pub async fn add_category<R>(
    State(state): State<InventoryAppState<R>>,
    Json(req): Json<AddCategoryRequest>,
) -> InventoryResult<impl IntoResponse>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let output = AddCategoryUseCase::new(state.repo.clone())
        .execute(AddCategoryInput { name: req.name })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddCategoryResponse {
            message: "Category added successfully".to_string(),
            category_id: output.category_id.as_i64(),
            category_name: output.name.into_string(),
        }),
    ))
}

/// GET /api/products/categories/list
pub async fn list_categories<R>(
    State(state): State<InventoryAppState<R>>,
) -> InventoryResult<Json<Vec<String>>>
where
    R: ProductRepository + CategoryRepository + Clone + Send + Sync + 'static,
{
    let names = ListCategoriesUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(names))
}
