//! Delete Product Use Case

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::repository::ProductRepository;
use crate::error::{InventoryError, InventoryResult};

/// Delete product input
pub struct DeleteProductInput {
    pub id: ProductId,
}

/// Delete product use case
pub struct DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> DeleteProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, input: DeleteProductInput) -> InventoryResult<()> {
        let deleted = self.product_repo.delete(input.id).await?;
        if !deleted {
            return Err(InventoryError::ProductNotFound);
        }

        tracing::info!(product_id = %input.id, "Product deleted");
        Ok(())
    }
}
