//! API DTOs (Data Transfer Objects)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entity::product::Product;

// ============================================================================
// Products
// ============================================================================

/// Product create/update request
///
/// Fields are optional so an absent field maps to the contract's 400
/// instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

/// Product as returned by the list endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: Decimal,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i64(),
            name: product.name,
            category: product.category,
            quantity: product.quantity,
            price: product.price,
        }
    }
}

/// Create product response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub message: String,
    pub product_id: i64,
}

/// Generic message response (update, delete, reset)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Categories
// ============================================================================

/// Add category request
#[derive(Debug, Clone, Deserialize)]
pub struct AddCategoryRequest {
    pub name: Option<String>,
}

/// Add category response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCategoryResponse {
    pub message: String,
    pub category_id: i64,
    pub category_name: String,
}
