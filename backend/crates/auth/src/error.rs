//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::user_name::UserNameError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Detail shared by every token failure so callers cannot tell them apart
const TOKEN_REJECTED: &str = "Invalid or expired token";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// User name failed validation
    #[error("Invalid user name: {0}")]
    InvalidUserName(#[from] UserNameError),

    /// Password failed the registration policy
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Unknown user or wrong password
    #[error("Invalid user name or password")]
    InvalidCredentials,

    /// No usable `Authorization: Bearer` header
    #[error("Missing bearer token")]
    MissingToken,

    /// Malformed token, bad signature or unusable claims
    #[error("Invalid token")]
    InvalidToken,

    /// Token expiry has passed
    #[error("Token expired")]
    ExpiredToken,

    /// Token could not be signed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidBody(_)
            | AuthError::InvalidUserName(_)
            | AuthError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::UserNameTaken => StatusCode::CONFLICT,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidBody(_)
            | AuthError::InvalidUserName(_)
            | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken => ErrorKind::Unauthorized,
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; token failures share one detail.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::InvalidBody(msg) => AppError::bad_request(msg.clone())
                .with_action("Send a JSON body with username and password"),
            AuthError::UserNameTaken => AppError::conflict(self.to_string())
                .with_action("Please choose a different user name"),
            AuthError::InvalidCredentials => AppError::unauthorized(self.to_string()),
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::ExpiredToken => {
                AppError::unauthorized(TOKEN_REJECTED)
                    .with_action("Sign in and send the token as 'Authorization: Bearer <token>'")
            }
            AuthError::Signing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Signing(msg) => {
                tracing::error!(message = %msg, "Token signing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::ExpiredToken => {
                tracing::warn!(reason = %self, "Bearer token rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::InvalidBody(rejection.body_text())
    }
}
