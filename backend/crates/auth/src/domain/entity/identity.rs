//! Authenticated Identity
//!
//! What a verified token proves about the caller.

use kernel::id::UserId;

use crate::domain::entity::user::User;

/// Caller identity recovered from a valid bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: UserId,
    pub user_name: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            user_name: user.user_name.as_str().to_string(),
        }
    }
}
