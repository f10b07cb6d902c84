//! Repository Traits
//!
//! Interfaces for the two external stores. Implementations are in the
//! infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
use crate::error::AuthResult;

/// Credential store trait (relational, durable)
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Insert a new user
    ///
    /// Returns `AuthError::UserNameTaken` when the user name already exists.
    async fn insert(&self, user: &User) -> AuthResult<()>;

    /// Find user by exact user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;
}

/// Session store trait (key-value, expiring)
#[trait_variant::make(SessionStore: Send)]
pub trait LocalSessionStore {
    /// Store `token -> user name` for the session's TTL
    async fn put(&self, session: &Session) -> AuthResult<()>;

    /// Resolve a token; `None` if never issued or expired
    async fn get(&self, token: &SessionToken) -> AuthResult<Option<UserName>>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
