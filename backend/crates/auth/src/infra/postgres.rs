//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::domain::value_object::{
    session_token::SessionToken, user_name::UserName, user_password::UserPassword,
};
use crate::error::{AuthError, AuthResult};

// ============================================================================
// Credential Store Implementation
// ============================================================================

/// PostgreSQL-backed credential store (`users` table)
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialStore for PgCredentialStore {
    async fn insert(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_name,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.user_name.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthError::UserNameTaken
            }
            other => AuthError::Database(other),
        })?;

        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_name,
                password_hash,
                created_at
            FROM users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Session Store Implementation
// ============================================================================

/// PostgreSQL-backed session store (`auth_sessions` table)
///
/// Only the SHA-256 of each token is persisted. Expired rows stop resolving
/// immediately and are physically removed by `cleanup_expired`.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionStore for PgSessionStore {
    async fn put(&self, session: &Session) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_token_hash,
                user_name,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(session.token.digest().to_vec())
        .bind(session.user_name.as_str())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, token: &SessionToken) -> AuthResult<Option<UserName>> {
        let now_ms = Utc::now().timestamp_millis();

        let user_name = sqlx::query_scalar::<_, String>(
            r#"
            SELECT user_name
            FROM auth_sessions
            WHERE session_token_hash = $1 AND expires_at_ms > $2
            "#,
        )
        .bind(token.digest().to_vec())
        .bind(now_ms)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user_name.map(UserName::from_db))
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms <= $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_name: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    /// A stored hash that is not a PHC string is corrupt data and surfaces
    /// as an internal error, never as a failed password check.
    fn into_user(self) -> AuthResult<User> {
        let password_hash = UserPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Invalid password_hash: {}", e)))?;

        Ok(User {
            user_name: UserName::from_db(self.user_name),
            password_hash,
            created_at: self.created_at,
        })
    }
}
