//! Inventory Error Types
//!
//! Inventory-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. As with auth, the wire contract maps
//! duplicate categories to a 400 rather than a 409.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Inventory-specific result type alias
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-specific error variants
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required product field is absent or blank
    #[error("All fields are required")]
    MissingFields,

    /// Quantity below zero
    #[error("Quantity cannot be negative")]
    NegativeQuantity,

    /// Price below zero
    #[error("Price cannot be negative")]
    NegativePrice,

    /// No product with the requested id
    #[error("Product not found")]
    ProductNotFound,

    /// Category name empty after trimming
    #[error("Category name is required")]
    CategoryNameRequired,

    /// Category name already registered
    #[error("Category already exists")]
    CategoryExists,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl InventoryError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::MissingFields
            | InventoryError::NegativeQuantity
            | InventoryError::NegativePrice
            | InventoryError::CategoryNameRequired
            | InventoryError::CategoryExists => ErrorKind::BadRequest,
            InventoryError::ProductNotFound => ErrorKind::NotFound,
            InventoryError::Database(_) | InventoryError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server errors get a fixed generic message; detail stays in the logs.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal server error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            InventoryError::Database(e) => {
                tracing::error!(error = %e, "Inventory database error");
            }
            InventoryError::Internal(msg) => {
                tracing::error!(message = %msg, "Inventory internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Inventory error");
            }
        }
    }
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
