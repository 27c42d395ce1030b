//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::id::ProductId;
use std::sync::Arc;

use auth::middleware::AuthenticatedUser;

use crate::application::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};
use crate::domain::repository::ProductRepository;
use crate::error::CatalogResult;
use crate::presentation::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};

/// Shared state for catalog handlers
pub struct CatalogAppState<R>
where
    R: ProductRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

impl<R> Clone for CatalogAppState<R>
where
    R: ProductRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// GET /products
pub async fn list_products<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ProductResponse>>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let products = ListProductsUseCase::new(state.repo.clone()).execute().await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /products/{id}
pub async fn get_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let id: ProductId = id.parse()?;
    let product = GetProductUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(Json(product.into()))
}

/// POST /products
pub async fn create_product<R>(
    State(state): State<CatalogAppState<R>>,
    AuthenticatedUser(caller): AuthenticatedUser,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<ProductResponse>)>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let product = CreateProductUseCase::new(state.repo.clone())
        .execute(req.into())
        .await?;

    tracing::debug!(product_id = %product.id, user_id = %caller.user_id, "Create request served");

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// PUT /products/{id}
pub async fn update_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> CatalogResult<Json<ProductResponse>>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let id: ProductId = id.parse()?;
    let Json(req) = body?;

    let product = UpdateProductUseCase::new(state.repo.clone())
        .execute(id, req.into())
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/{id}
pub async fn delete_product<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode>
where
    R: ProductRepository + Send + Sync + 'static,
{
    let id: ProductId = id.parse()?;
    DeleteProductUseCase::new(state.repo.clone())
        .execute(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
