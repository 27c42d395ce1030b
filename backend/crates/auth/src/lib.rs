//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, token issue/verify, configuration
//! - `infra/` - PostgreSQL and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer gate
//!
//! ## Features
//! - User registration and login with username + password
//! - Stateless HS256 bearer tokens (default lifetime 24h)
//! - `require_bearer` middleware for protecting other crates' routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional pepper), off the async runtime
//! - Unknown user and wrong password are indistinguishable, in body and in cost
//! - All token failures return the same 401 body

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, AuthConfigError};
pub use application::token::{TokenIssuer, TokenVerifier};
pub use domain::entity::identity::Identity;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
