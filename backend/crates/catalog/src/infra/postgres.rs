//! PostgreSQL Repository Implementation

use kernel::id::ProductId;
use sqlx::PgPool;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repository::ProductRepository;
use crate::domain::value_objects::{Price, ProductName};
use crate::error::{CatalogError, CatalogResult};

/// PostgreSQL-backed product repository
#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for PgProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image_path, html_content
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::into_product).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, image_path, html_content
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn create(&self, product: &NewProduct) -> CatalogResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, price, image_path, html_content)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, image_path, html_content
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(product.price.value())
        .bind(product.image_path.as_deref())
        .bind(product.html_content.as_deref())
        .fetch_one(&self.pool)
        .await?;

        row.into_product()
    }

    async fn update(&self, product: &Product) -> CatalogResult<bool> {
        let affected = sqlx::query(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                price = $4,
                image_path = $5,
                html_content = $6,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(product.id.value())
        .bind(product.name.as_str())
        .bind(product.description.as_deref())
        .bind(product.price.value())
        .bind(product.image_path.as_deref())
        .bind(product.html_content.as_deref())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<bool> {
        let affected = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    image_path: Option<String>,
    html_content: Option<String>,
}

impl ProductRow {
    fn into_product(self) -> CatalogResult<Product> {
        let price = Price::new(self.price).map_err(|e| {
            CatalogError::Internal(format!("Invalid price stored for product {}: {e}", self.id))
        })?;

        Ok(Product {
            id: ProductId::from_i64(self.id),
            name: ProductName::from_db(self.name),
            description: self.description,
            price,
            image_path: self.image_path,
            html_content: self.html_content,
        })
    }
}
