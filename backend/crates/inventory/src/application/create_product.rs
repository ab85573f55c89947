//! Create Product Use Case

use std::sync::Arc;

use kernel::id::ProductId;
use rust_decimal::Decimal;

use crate::domain::entity::product::ProductDraft;
use crate::domain::repository::ProductRepository;
use crate::error::InventoryResult;

/// Create product input
///
/// Fields arrive as `Option` so that a missing field maps to the
/// validation error rather than a deserialization failure.
pub struct CreateProductInput {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

/// Create product output
#[derive(Debug)]
pub struct CreateProductOutput {
    pub product_id: ProductId,
}

/// Create product use case
pub struct CreateProductUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> CreateProductUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> InventoryResult<CreateProductOutput> {
        let draft = ProductDraft::new(input.name, input.category, input.quantity, input.price)?;

        let product_id = self.product_repo.insert(&draft).await?;

        tracing::info!(
            product_id = %product_id,
            name = %draft.name(),
            "Product created"
        );

        Ok(CreateProductOutput { product_id })
    }
}
