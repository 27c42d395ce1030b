//! User Entity
//!
//! A registered account: the unique name and its password hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// Persisted user
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub user_id: UserId,
    /// Canonical user name (unique, used for login)
    pub user_name: UserName,
    /// Argon2id hash, never the clear text
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
}

/// User about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub password: UserPassword,
}

impl NewUser {
    pub fn new(user_name: UserName, password: UserPassword) -> Self {
        Self {
            user_name,
            password,
        }
    }
}
