//! Update Product Use Case
//!
//! Read, merge, write. Concurrent updates are last-write-wins.

use std::sync::Arc;

use kernel::id::ProductId;

use crate::domain::entities::{Product, ProductPatch};
use crate::domain::repository::ProductRepository;
use crate::domain::value_objects::{Price, ProductName, ProductValidationError, optional_text};
use crate::error::{CatalogError, CatalogResult};

/// Raw partial update; `None` means "leave unchanged"
///
/// An empty string for an optional text field clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

impl UpdateProductInput {
    pub fn validate(self) -> Result<ProductPatch, ProductValidationError> {
        Ok(ProductPatch {
            name: self.name.map(ProductName::new).transpose()?,
            description: self.description.map(|d| optional_text(Some(d))),
            price: self.price.map(Price::new).transpose()?,
            image_path: self.image_path.map(|p| optional_text(Some(p))),
            html_content: self.html_content.map(|h| optional_text(Some(h))),
        })
    }
}

pub struct UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: ProductId,
        input: UpdateProductInput,
    ) -> CatalogResult<Product> {
        let patch = input.validate()?;

        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        if patch.is_empty() {
            return Ok(existing);
        }

        let merged = patch.apply(existing);

        // Row deleted between read and write
        if !self.repo.update(&merged).await? {
            return Err(CatalogError::NotFound(id));
        }

        tracing::info!(product_id = %id, "Product updated");

        Ok(merged)
    }
}
