//! Bearer Token Extraction
//!
//! Parses `Authorization: Bearer <token>` (RFC 6750, section 2.1).

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Authentication scheme expected in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Why a bearer token could not be read from a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not valid ASCII")]
    InvalidHeader,

    #[error("Authorization scheme is not Bearer")]
    WrongScheme,

    #[error("Bearer token is empty")]
    EmptyToken,
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively; surrounding whitespace is ignored.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?
        .to_str()
        .map_err(|_| BearerError::InvalidHeader)?
        .trim_start();

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::WrongScheme)?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(BearerError::WrongScheme);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::EmptyToken);
    }

    Ok(token)
}
