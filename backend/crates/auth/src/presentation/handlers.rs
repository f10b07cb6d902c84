//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    CredentialsRequest, LoginResponse, RegisterResponse, SessionQuery, SessionResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<C, S>
where
    C: CredentialStore + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    pub credentials: Arc<C>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
pub async fn register<C, S>(
    State(state): State<AuthAppState<C, S>>,
    body: Bytes,
) -> AuthResult<Json<RegisterResponse>>
where
    C: CredentialStore + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let req = CredentialsRequest::from_body(&body).map_err(AuthError::InvalidBody)?;

    let use_case = RegisterUseCase::new(state.credentials.clone(), state.config.clone());
    use_case
        .execute(RegisterInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(RegisterResponse {
        message: "User registered successfully",
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<C, S>(
    State(state): State<AuthAppState<C, S>>,
    body: Bytes,
) -> AuthResult<Json<LoginResponse>>
where
    C: CredentialStore + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let req = CredentialsRequest::from_body(&body).map_err(AuthError::InvalidBody)?;

    let use_case = LoginUseCase::new(
        state.credentials.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );
    let output = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        session: output.session_token,
    }))
}

// ============================================================================
// Session Check
// ============================================================================

/// GET /session?token=
pub async fn check_session<C, S>(
    State(state): State<AuthAppState<C, S>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AuthResult<Json<SessionResponse>>
where
    C: CredentialStore + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    // An undecodable query carries no usable token.
    let query = query
        .map(|Query(pairs)| SessionQuery::from_pairs(pairs))
        .unwrap_or_default();

    let use_case = CheckSessionUseCase::new(state.sessions.clone());
    let output = use_case.execute(query.token).await?;

    Ok(Json(SessionResponse {
        username: output.user_name,
    }))
}
