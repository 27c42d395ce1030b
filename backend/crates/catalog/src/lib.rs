//! Catalog (Product) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Product entity, value objects, repository trait
//! - `application/` - One use case per product operation
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Access Model
//! - `GET /products` is public
//! - Reading one product and every write require a bearer token
//!   (`auth::middleware::require_bearer`); rejected requests never reach the repository

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use infra::{memory::InMemoryProductRepository, postgres::PgProductRepository};
pub use presentation::router::{catalog_router, catalog_router_generic};
