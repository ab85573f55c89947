//! Reset Inventory Use Case
//!
//! Drops every product. The category registry is untouched.

use std::sync::Arc;

use crate::domain::repository::ProductRepository;
use crate::error::InventoryResult;

/// Reset inventory use case
pub struct ResetInventoryUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ResetInventoryUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> InventoryResult<()> {
        self.product_repo.delete_all().await?;
        tracing::warn!("Inventory reset: all products deleted");
        Ok(())
    }
}
