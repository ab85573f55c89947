//! Application Layer
//!
//! One use case per file.

pub mod add_category;
pub mod create_product;
pub mod delete_product;
pub mod list_categories;
pub mod list_products;
pub mod reset_inventory;
pub mod update_product;

// Re-exports
pub use add_category::{AddCategoryInput, AddCategoryOutput, AddCategoryUseCase};
pub use create_product::{CreateProductInput, CreateProductOutput, CreateProductUseCase};
pub use delete_product::{DeleteProductInput, DeleteProductUseCase};
pub use list_categories::ListCategoriesUseCase;
pub use list_products::ListProductsUseCase;
pub use reset_inventory::ResetInventoryUseCase;
pub use update_product::{UpdateProductInput, UpdateProductUseCase};
