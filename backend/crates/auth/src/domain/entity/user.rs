//! User Entity
//!
//! A registered credential: user name plus password hash.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};

/// User entity
///
/// Created on registration and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct User {
    /// User name (unique, exact-match login identifier)
    pub user_name: UserName,
    /// Argon2id PHC hash of the password
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
