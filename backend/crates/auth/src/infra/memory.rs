//! In-Memory Repository
//!
//! Process-local adapter for tests and running without a database.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use kernel::id::UserId;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: HashMap<String, User>,
}

/// In-memory auth repository keyed by canonical user name
#[derive(Default)]
pub struct InMemoryAuthRepository {
    inner: Mutex<Inner>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| AuthError::Internal("User store lock poisoned".to_string()))
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut inner = self.lock()?;

        if inner.users.contains_key(user.user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }

        inner.next_id += 1;
        let stored = User {
            user_id: UserId::from_i64(inner.next_id),
            user_name: user.user_name.clone(),
            password: user.password.clone(),
            created_at: Utc::now(),
        };
        inner
            .users
            .insert(user.user_name.as_str().to_string(), stored.clone());

        Ok(stored)
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.lock()?.users.get(user_name.as_str()).cloned())
    }
}
