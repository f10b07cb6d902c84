//! Session Entity
//!
//! Maps an opaque token to the user name that logged in.
//! Sessions are never deleted explicitly; they stop resolving once the TTL
//! has elapsed.

use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::domain::value_object::{session_token::SessionToken, user_name::UserName};

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Random bearer token
    pub token: SessionToken,
    /// User the session was issued to
    pub user_name: UserName,
    /// Lifetime from creation
    pub ttl: Duration,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Issue a new session with a fresh token
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn issue(user_name: UserName, ttl: Duration) -> Self {
        let now = Utc::now();
        let ttl_ms = i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX);

        Self {
            token: SessionToken::generate(),
            user_name,
            ttl,
            expires_at_ms: now.timestamp_millis().saturating_add(ttl_ms),
            created_at: now,
        }
    }
}
