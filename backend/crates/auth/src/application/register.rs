//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
///
/// Fields are optional because the request body may omit them.
pub struct RegisterInput {
    pub user_name: Option<String>,
    pub password: Option<String>,
}

/// Register use case
pub struct RegisterUseCase<C>
where
    C: CredentialStore,
{
    credentials: Arc<C>,
    config: Arc<AuthConfig>,
}

impl<C> RegisterUseCase<C>
where
    C: CredentialStore,
{
    pub fn new(credentials: Arc<C>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        let (Some(user_name), Some(password)) = (input.user_name, input.password) else {
            return Err(AuthError::MissingCredentials);
        };

        let user_name = UserName::new(user_name).map_err(|_| AuthError::MissingCredentials)?;
        let raw_password = RawPassword::new(password).map_err(|_| AuthError::MissingCredentials)?;

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(user_name, password_hash);

        // Uniqueness is enforced by the store; a concurrent duplicate
        // surfaces here as UserNameTaken.
        self.credentials.insert(&user).await?;

        tracing::info!(user_name = %user.user_name, "User registered");

        Ok(())
    }
}
