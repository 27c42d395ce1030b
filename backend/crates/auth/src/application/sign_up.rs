//! Sign Up Use Case
//!
//! Creates a new user account (Credential Store `Create`).

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::{identity::Identity, user::NewUser};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<Identity> {
        let user_name = UserName::new(&input.user_name)?;
        let raw_password = RawPassword::new(input.password)?;

        // Cheap early exit; the unique index still decides races
        if self.user_repo.find_by_user_name(&user_name).await?.is_some() {
            return Err(AuthError::UserNameTaken);
        }

        let config = Arc::clone(&self.config);
        let password = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = self
            .user_repo
            .create(&NewUser::new(user_name, password))
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(Identity::from(&user))
    }
}
