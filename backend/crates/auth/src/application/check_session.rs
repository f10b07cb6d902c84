//! Check Session Use Case
//!
//! Resolves a session token to the user name it was issued to.

use std::sync::Arc;

use crate::domain::repository::SessionStore;
use crate::domain::value_object::session_token::SessionToken;
use crate::error::{AuthError, AuthResult};

/// Session info output
#[derive(Debug)]
pub struct SessionInfoOutput {
    pub user_name: String,
}

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore,
{
    sessions: Arc<S>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore,
{
    pub fn new(sessions: Arc<S>) -> Self {
        Self { sessions }
    }

    /// Look up the session; read-only
    pub async fn execute(&self, token: Option<String>) -> AuthResult<SessionInfoOutput> {
        let token = token
            .and_then(SessionToken::parse)
            .ok_or(AuthError::MissingSessionToken)?;

        let user_name = self
            .sessions
            .get(&token)
            .await?
            .ok_or(AuthError::SessionNotFound)?;

        Ok(SessionInfoOutput {
            user_name: user_name.into_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::session::Session;
    use crate::domain::value_object::user_name::UserName;
    use crate::infra::memory::MemorySessionStore;
    use std::time::Duration;

    #[tokio::test]
    async fn test_missing_token() {
        let use_case = CheckSessionUseCase::new(Arc::new(MemorySessionStore::new()));

        let err = use_case.execute(None).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingSessionToken));

        let err = use_case.execute(Some(String::new())).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingSessionToken));
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let use_case = CheckSessionUseCase::new(Arc::new(MemorySessionStore::new()));
        let err = use_case
            .execute(Some(SessionToken::generate().into_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_known_token() {
        let store = Arc::new(MemorySessionStore::new());
        let session = Session::issue(UserName::new("alice").unwrap(), Duration::from_secs(3600));
        store.put(&session).await.unwrap();

        let use_case = CheckSessionUseCase::new(store);
        let output = use_case
            .execute(Some(session.token.as_str().to_string()))
            .await
            .unwrap();
        assert_eq!(output.user_name, "alice");
    }
}
