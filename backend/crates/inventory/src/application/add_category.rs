//! Add Category Use Case

use std::sync::Arc;

use kernel::id::CategoryId;

use crate::domain::repository::CategoryRepository;
use crate::domain::value_object::category_name::CategoryName;
use crate::error::{InventoryError, InventoryResult};

/// Add category input
pub struct AddCategoryInput {
    pub name: Option<String>,
}

/// Add category output
#[derive(Debug)]
pub struct AddCategoryOutput {
    pub category_id: CategoryId,
    pub name: CategoryName,
}

/// Add category use case
pub struct AddCategoryUseCase<C>
where
    C: CategoryRepository,
{
    category_repo: Arc<C>,
}

impl<C> AddCategoryUseCase<C>
where
    C: CategoryRepository,
{
    pub fn new(category_repo: Arc<C>) -> Self {
        Self { category_repo }
    }

    pub async fn execute(&self, input: AddCategoryInput) -> InventoryResult<AddCategoryOutput> {
        let raw = input.name.ok_or(InventoryError::CategoryNameRequired)?;
        let name = CategoryName::new(raw)?;

        let category_id = self.category_repo.insert(&name).await?;

        tracing::info!(category_id = %category_id, name = %name, "Category added");

        Ok(AddCategoryOutput { category_id, name })
    }
}
