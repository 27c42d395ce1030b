//! Catalog Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::TokenVerifier;
use auth::middleware::require_bearer;

use crate::domain::repository::ProductRepository;
use crate::infra::postgres::PgProductRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgProductRepository, verifier: Arc<TokenVerifier>) -> Router {
    catalog_router_generic(repo, verifier)
}

/// Create a generic Catalog router for any repository implementation
///
/// Listing is public; everything else sits behind the bearer gate.
pub fn catalog_router_generic<R>(repo: R, verifier: Arc<TokenVerifier>) -> Router
where
    R: ProductRepository + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new().route("/products", get(handlers::list_products::<R>));

    let protected = Router::new()
        .route("/products", post(handlers::create_product::<R>))
        .route(
            "/products/{id}",
            get(handlers::get_product::<R>)
                .put(handlers::update_product::<R>)
                .delete(handlers::delete_product::<R>),
        )
        .route_layer(middleware::from_fn_with_state(verifier, require_bearer));

    public.merge(protected).with_state(state)
}
