//! List Products Use Case
//!
//! Returns the whole inventory, newest entry first.

use std::sync::Arc;

use crate::domain::entity::product::Product;
use crate::domain::repository::ProductRepository;
use crate::error::InventoryResult;

/// List products use case
pub struct ListProductsUseCase<P>
where
    P: ProductRepository,
{
    product_repo: Arc<P>,
}

impl<P> ListProductsUseCase<P>
where
    P: ProductRepository,
{
    pub fn new(product_repo: Arc<P>) -> Self {
        Self { product_repo }
    }

    pub async fn execute(&self) -> InventoryResult<Vec<Product>> {
        self.product_repo.list().await
    }
}
