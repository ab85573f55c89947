//! List Categories Use Case
//!
//! Returns registered category names in alphabetical order.

use std::sync::Arc;

use crate::domain::repository::CategoryRepository;
use crate::error::InventoryResult;

/// List categories use case
pub struct ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> ListCategoriesUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self) -> InventoryResult<Vec<String>> {
        self.category_repo.list_names().await
    }
}
