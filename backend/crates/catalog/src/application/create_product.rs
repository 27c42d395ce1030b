//! Create Product Use Case

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::domain::value_objects::{Price, ProductName, ProductValidationError, optional_text};
use crate::error::CatalogResult;

/// Raw create input; every field is checked before insert
#[derive(Debug, Clone, Default)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_path: Option<String>,
    pub html_content: Option<String>,
}

impl CreateProductInput {
    pub fn validate(self) -> Result<NewProduct, ProductValidationError> {
        let name = ProductName::new(self.name.unwrap_or_default())?;
        let price = Price::new(self.price.ok_or(ProductValidationError::MissingPrice)?)?;

        Ok(NewProduct {
            name,
            description: optional_text(self.description),
            price,
            image_path: optional_text(self.image_path),
            html_content: optional_text(self.html_content),
        })
    }
}

pub struct CreateProductUseCase<R>
where
    R: ProductRepository,
{
    repo: Arc<R>,
}

impl<R> CreateProductUseCase<R>
where
    R: ProductRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateProductInput) -> CatalogResult<Product> {
        let new_product = input.validate()?;
        let product = self.repo.create(&new_product).await?;

        tracing::info!(product_id = %product.id, name = %product.name, "Product created");

        Ok(product)
    }
}
