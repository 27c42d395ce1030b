//! API Server Library
//!
//! Router assembly shared by the binary and the integration tests.

pub mod config;

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::{AuthConfig, TokenVerifier, auth_router_generic};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use catalog::catalog_router_generic;
use catalog::domain::repository::ProductRepository;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router from any repository pair
///
/// One `AuthConfig` feeds both the token issuer (login) and the bearer gate
/// (products), so tokens minted here are accepted there.
pub fn build_app<U, P>(users: U, products: P, auth_config: Arc<AuthConfig>) -> Router
where
    U: UserRepository + Send + Sync + 'static,
    P: ProductRepository + Send + Sync + 'static,
{
    let verifier = Arc::new(TokenVerifier::new(&auth_config));

    Router::new()
        .merge(auth_router_generic(users, auth_config))
        .merge(catalog_router_generic(products, verifier))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
