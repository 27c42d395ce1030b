//! Server Configuration
//!
//! Everything comes from the environment (optionally via `.env`).
//! Invalid values are fatal at startup.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use auth::{AuthConfig, AuthConfigError};
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error(transparent)]
    Auth(#[from] AuthConfigError),
}

impl ConfigError {
    fn invalid(name: &'static str, reason: impl ToString) -> Self {
        ConfigError::Invalid {
            name,
            reason: reason.to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: Arc<AuthConfig>,
}

impl AppConfig {
    /// Read configuration from process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = match var("DATABASE_URL") {
            Some(url) => url,
            None => database_url_from_parts(&var)?,
        };

        let max_connections = match var("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::invalid("DB_MAX_CONNECTIONS", "expected a positive integer")
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid("BIND_ADDR", e))?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let auth = Arc::new(auth_config(&var)?);

        Ok(Self {
            database_url,
            max_connections,
            bind_addr,
            frontend_origins,
            auth,
        })
    }
}

fn database_url_from_parts<V>(var: &V) -> Result<String, ConfigError>
where
    V: Fn(&str) -> Option<String>,
{
    let host = var("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = var("DB_PORT").unwrap_or_else(|| "5432".to_string());
    let user = var("DB_USER").unwrap_or_else(|| "postgres".to_string());
    let password = var("DB_PASSWORD").unwrap_or_else(|| "postgres".to_string());
    let name = var("DB_NAME").unwrap_or_else(|| "garage".to_string());
    let ssl_mode = var("DB_SSL_MODE").unwrap_or_else(|| "disable".to_string());

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|e| ConfigError::invalid("DB_PORT", e))?;

    Ok(format!(
        "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={ssl_mode}"
    ))
}

fn auth_config<V>(var: &V) -> Result<AuthConfig, ConfigError>
where
    V: Fn(&str) -> Option<String>,
{
    let config = match var("JWT_SECRET") {
        Some(secret_b64) => {
            let secret = platform::crypto::from_base64(&secret_b64)
                .map_err(|e| ConfigError::invalid("JWT_SECRET", e))?;
            AuthConfig::new(secret)?
        }
        None if cfg!(debug_assertions) => {
            tracing::warn!(
                "JWT_SECRET not set, using a random secret; tokens will not survive a restart"
            );
            AuthConfig::development()
        }
        None => return Err(ConfigError::Missing("JWT_SECRET")),
    };

    let ttl_hours = match var("TOKEN_TTL_HOURS") {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::invalid("TOKEN_TTL_HOURS", e))?,
        None => DEFAULT_TOKEN_TTL_HOURS,
    };
    let ttl = Duration::from_secs(ttl_hours.saturating_mul(3600));
    let config = config.with_token_ttl(ttl)?;

    Ok(match var("PASSWORD_PEPPER") {
        Some(pepper) => config.with_pepper(pepper.into_bytes()),
        None => config,
    })
}
