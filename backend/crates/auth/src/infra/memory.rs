//! In-memory store implementations
//!
//! Drop-in substitutes for the PostgreSQL stores, used by tests and local
//! runs without a database. Session expiry follows the tokio clock, so tests
//! can move time forward with `tokio::time::advance`.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Credential Store
// ============================================================================

#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<RwLock<HashMap<UserName, User>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

impl CredentialStore for MemoryCredentialStore {
    async fn insert(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_name.clone(), user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name).cloned())
    }
}

// ============================================================================
// Session Store
// ============================================================================

struct SessionEntry {
    user_name: UserName,
    /// `None` when the TTL is beyond what the clock can represent
    deadline: Option<Instant>,
}

impl SessionEntry {
    fn is_live(&self, now: Instant) -> bool {
        self.deadline.is_none_or(|deadline| deadline > now)
    }
}

#[derive(Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<RwLock<HashMap<SessionToken, SessionEntry>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until cleanup
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl SessionStore for MemorySessionStore {
    async fn put(&self, session: &Session) -> AuthResult<()> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        if entries
            .get(&session.token)
            .is_some_and(|entry| entry.is_live(now))
        {
            return Err(AuthError::Internal("session token collision".to_string()));
        }

        entries.insert(
            session.token.clone(),
            SessionEntry {
                user_name: session.user_name.clone(),
                deadline: now.checked_add(session.ttl),
            },
        );
        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> AuthResult<Option<UserName>> {
        let now = Instant::now();
        Ok(self
            .entries
            .read()
            .await
            .get(token)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.user_name.clone()))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        Ok((before - entries.len()) as u64)
    }
}
