//! Update Product Use Case
//!
//! Overwrite-update: every field must be supplied, the stored row is
//! replaced wholesale.

use std::sync::Arc;

use kernel::id::ProductId;
use rust_decimal::Decimal;

use crate::domain::entity::product::ProductDraft;
use crate::domain::repository::ProductRepository;
use crate::error::{InventoryError, InventoryResult};

/// Update product input
pub struct UpdateProductInput {
    pub id: ProductId,
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

/// Update product use case
pub struct UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> UpdateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, input: UpdateProductInput) -> InventoryResult<()> {
        let draft = ProductDraft::new(input.name, input.category, input.quantity, input.price)?;

        let updated = self.product_repo.update(input.id, &draft).await?;
        if !updated {
            return Err(InventoryError::ProductNotFound);
        }

        tracing::info!(product_id = %input.id, "Product updated");
        Ok(())
    }
}
