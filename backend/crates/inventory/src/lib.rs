//! Inventory (Product/Category) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Product CRUD (list newest-first, create, overwrite-update, delete)
//! - Full inventory reset
//! - Category registry (unique names, alphabetical listing)
//!
//! Products store their category as a plain string; there is no foreign
//! key to the category registry, so deleting or renaming a category never
//! touches existing products.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{InventoryError, InventoryResult};
pub use infra::mysql::MySqlInventoryRepository;
pub use presentation::router::inventory_router;
