//! Application Configuration
//!
//! Configuration for the Auth application layer.
//! Built once at startup and shared read-only behind an `Arc`.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Minimum signing secret length in bytes (HS256 key size)
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthConfigError {
    #[error("Token secret must be at least {min} bytes (got {actual})")]
    SecretTooShort { min: usize, actual: usize },

    #[error("Token TTL must be greater than zero")]
    ZeroTtl,
}

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Symmetric secret for HS256 token signing
    token_secret: Vec<u8>,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Create config with an explicit signing secret and the default TTL
    pub fn new(token_secret: Vec<u8>) -> Result<Self, AuthConfigError> {
        if token_secret.len() < MIN_TOKEN_SECRET_LENGTH {
            return Err(AuthConfigError::SecretTooShort {
                min: MIN_TOKEN_SECRET_LENGTH,
                actual: token_secret.len(),
            });
        }

        Ok(Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        })
    }

    /// Create config with a random signing secret (for development)
    ///
    /// Tokens do not survive a restart.
    pub fn development() -> Self {
        Self {
            token_secret: platform::crypto::random_bytes(MIN_TOKEN_SECRET_LENGTH),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Override the token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Result<Self, AuthConfigError> {
        if ttl.is_zero() {
            return Err(AuthConfigError::ZeroTtl);
        }
        self.token_ttl = ttl;
        Ok(self)
    }

    /// Set the password pepper
    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.password_pepper = Some(pepper);
        self
    }

    /// Signing secret bytes
    pub fn token_secret(&self) -> &[u8] {
        &self.token_secret
    }

    /// Token lifetime in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        i64::try_from(self.token_ttl.as_secs()).unwrap_or(i64::MAX)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
