//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_in;
pub mod sign_up;
pub mod token;

// Re-exports
pub use config::{AuthConfig, AuthConfigError};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::{Claims, IssuedToken, TokenIssuer, TokenVerifier};
