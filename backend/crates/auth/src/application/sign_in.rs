//! Sign In Use Case
//!
//! Authenticates a user (Credential Store `Authenticate`) and issues a bearer token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::{IssuedToken, TokenIssuer};
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub identity: Identity,
    pub token: IssuedToken,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: Arc<TokenIssuer>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, issuer: Arc<TokenIssuer>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            issuer,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let identity = self.authenticate(input).await?;
        let token = self.issuer.issue(&identity)?;

        tracing::info!(
            user_id = %identity.user_id,
            expires_at = token.expires_at,
            "User signed in"
        );

        Ok(SignInOutput { identity, token })
    }

    /// Check credentials without issuing a token
    ///
    /// Unknown user, malformed name and wrong password all end in
    /// `InvalidCredentials` after one Argon2 verification.
    pub async fn authenticate(&self, input: SignInInput) -> AuthResult<Identity> {
        let raw_password = RawPassword::for_login(input.password);

        let user = match UserName::new(&input.user_name) {
            Ok(user_name) => self.user_repo.find_by_user_name(&user_name).await?,
            Err(_) => None,
        };

        let stored = user.as_ref().map(|u| u.password.clone());
        let config = Arc::clone(&self.config);
        let verified = tokio::task::spawn_blocking(move || match stored {
            Some(hash) => hash.verify(&raw_password, config.pepper()),
            None => UserPassword::verify_absent(&raw_password, config.pepper()),
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        match user {
            Some(user) if verified => Ok(Identity::from(&user)),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}
