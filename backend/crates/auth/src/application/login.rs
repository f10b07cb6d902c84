//! Login Use Case
//!
//! Authenticates a user and issues a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::session::Session;
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::domain::value_object::{user_name::UserName, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    /// Session token to hand to the client
    pub session_token: String,
}

/// Login use case
pub struct LoginUseCase<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    credentials: Arc<C>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> LoginUseCase<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    pub fn new(credentials: Arc<C>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials,
            sessions,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Every failure below is the same InvalidCredentials so the response
        // never reveals whether the user name exists.
        let user_name = input
            .user_name
            .and_then(|name| UserName::new(name).ok())
            .ok_or(AuthError::InvalidCredentials)?;
        let raw_password = input
            .password
            .and_then(|password| RawPassword::new(password).ok())
            .ok_or(AuthError::InvalidCredentials)?;

        let user = self
            .credentials
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !user
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session::issue(user.user_name, self.config.session_ttl);
        self.sessions.put(&session).await?;

        tracing::info!(
            user_name = %session.user_name,
            expires_at_ms = session.expires_at_ms,
            "User logged in"
        );

        Ok(LoginOutput {
            session_token: session.token.into_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::domain::value_object::session_token::SessionToken;
    use crate::infra::memory::{MemoryCredentialStore, MemorySessionStore};

    struct Fixture {
        login: LoginUseCase<MemoryCredentialStore, MemorySessionStore>,
        sessions: Arc<MemorySessionStore>,
    }

    async fn fixture() -> Fixture {
        let credentials = Arc::new(MemoryCredentialStore::new());
        let sessions = Arc::new(MemorySessionStore::new());
        let config = Arc::new(AuthConfig::default());

        RegisterUseCase::new(credentials.clone(), config.clone())
            .execute(RegisterInput {
                user_name: Some("alice".into()),
                password: Some("secret1".into()),
            })
            .await
            .unwrap();

        Fixture {
            login: LoginUseCase::new(credentials, sessions.clone(), config),
            sessions,
        }
    }

    fn input(user_name: Option<&str>, password: Option<&str>) -> LoginInput {
        LoginInput {
            user_name: user_name.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_login_issues_session() {
        let fx = fixture().await;
        let output = fx
            .login
            .execute(input(Some("alice"), Some("secret1")))
            .await
            .unwrap();

        assert!(!output.session_token.is_empty());
        let token = SessionToken::parse(output.session_token).unwrap();
        let user_name = fx.sessions.get(&token).await.unwrap().unwrap();
        assert_eq!(user_name.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_each_login_gets_new_token() {
        let fx = fixture().await;
        let a = fx
            .login
            .execute(input(Some("alice"), Some("secret1")))
            .await
            .unwrap();
        let b = fx
            .login
            .execute(input(Some("alice"), Some("secret1")))
            .await
            .unwrap();
        assert_ne!(a.session_token, b.session_token);
    }

    #[tokio::test]
    async fn test_failures_are_indistinguishable() {
        let fx = fixture().await;

        for case in [
            input(Some("alice"), Some("wrong")),
            input(Some("bob"), Some("secret1")),
            input(None, Some("secret1")),
            input(Some("alice"), None),
            input(Some(""), Some("")),
            input(Some("al\0ice"), Some("secret1")),
        ] {
            let err = fx.login.execute(case).await.err().unwrap();
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
        assert_eq!(fx.sessions.len().await, 0);
    }
}
