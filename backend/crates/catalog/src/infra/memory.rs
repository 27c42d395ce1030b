//! In-Memory Repository
//!
//! Process-local adapter for tests and running without a database.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use kernel::id::ProductId;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::error::{CatalogError, CatalogResult};

#[derive(Default)]
struct Inner {
    next_id: i64,
    products: BTreeMap<ProductId, Product>,
}

/// In-memory product repository; ids are never reused
#[derive(Default)]
pub struct InMemoryProductRepository {
    inner: Mutex<Inner>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| CatalogError::Internal("Product store lock poisoned".to_string()))
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.lock()?.products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.lock()?.products.get(&id).cloned())
    }

    async fn create(&self, product: &NewProduct) -> CatalogResult<Product> {
        let mut inner = self.lock()?;
        inner.next_id += 1;

        let stored = product.clone().with_id(ProductId::from_i64(inner.next_id));
        inner.products.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let mut inner = self.lock()?;
        match inner.products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        Ok(self.lock()?.products.remove(&id).is_some())
    }
}
