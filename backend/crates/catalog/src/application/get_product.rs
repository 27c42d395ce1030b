//! Get Product Use Case

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::entities::Product;
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

pub struct GetProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> GetProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: ProductId) -> CatalogResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }
}
