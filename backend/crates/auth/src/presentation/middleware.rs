//! Auth Middleware
//!
//! Bearer-token gate for protected routes.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::token::TokenVerifier;
use crate::domain::entity::identity::Identity;
use crate::error::AuthError;

/// Identity of the caller, placed in request extensions by [`require_bearer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub Identity);

/// Middleware that requires a valid bearer token
///
/// Use with `axum::middleware::from_fn_with_state(verifier, require_bearer)`.
pub async fn require_bearer(
    State(verifier): State<Arc<TokenVerifier>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer(req.headers()).map_err(|e| {
        tracing::debug!(reason = %e, "Bearer header rejected");
        AuthError::MissingToken
    })?;

    let identity = verifier.verify(token)?;

    tracing::debug!(user_id = %identity.user_id, "Bearer token accepted");

    req.extensions_mut().insert(AuthenticatedUser(identity));

    Ok(next.run(req).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
