//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::{IdParseError, ProductId};
use thiserror::Error;

use crate::domain::value_objects::ProductValidationError;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product field failed validation
    #[error(transparent)]
    Validation(#[from] ProductValidationError),

    /// Path id is not a positive integer
    #[error("Invalid product id: {0}")]
    InvalidId(#[from] IdParseError),

    /// Malformed request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No product with this id
    #[error("Product {0} not found")]
    NotFound(ProductId),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Validation(_)
            | CatalogError::InvalidId(_)
            | CatalogError::InvalidBody(_) => ErrorKind::BadRequest,
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(e) => AppError::bad_request(e.to_string())
                .with_action("Check the product fields and try again"),
            CatalogError::InvalidId(e) => {
                AppError::bad_request(e.to_string()).with_action("Use a positive integer id")
            }
            CatalogError::InvalidBody(msg) => AppError::bad_request(msg)
                .with_action("Send a valid JSON body with Content-Type: application/json"),
            CatalogError::NotFound(id) => AppError::not_found(format!("Product {id} not found")),
            // Constraint violations and connection failures keep their own classification
            CatalogError::Database(e) => AppError::from(e),
            CatalogError::Internal(_) => AppError::internal("Internal server error"),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::InvalidBody(rejection.body_text())
    }
}
