//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::ProductId;

use crate::domain::entities::{NewProduct, Product};
use crate::error::CatalogResult;

/// Product repository trait
///
/// Every method is a single statement; there are no transactions.
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// All products, ordered by id
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Find product by id
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Insert and return the stored product with its new id
    async fn create(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// Overwrite every column of an existing row
    /// Returns false if the row no longer exists
    async fn update(&self, product: &Product) -> CatalogResult<bool>;

    /// Delete by id
    /// Returns false if nothing was deleted
    async fn delete(&self, id: ProductId) -> CatalogResult<bool>;
}
