//! Auth Router

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::infra::postgres::{PgCredentialStore, PgSessionStore};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by PostgreSQL
pub fn auth_router(
    credentials: PgCredentialStore,
    sessions: PgSessionStore,
    config: AuthConfig,
) -> Router {
    auth_router_generic(credentials, sessions, config)
}

/// Create the Auth router for any store implementation
pub fn auth_router_generic<C, S>(credentials: C, sessions: S, config: AuthConfig) -> Router
where
    C: CredentialStore + Clone + Send + Sync + 'static,
    S: SessionStore + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        credentials: Arc::new(credentials),
        sessions: Arc::new(sessions),
        config: Arc::new(config),
    };

    Router::new()
        .route("/register", post(handlers::register::<C, S>))
        .route("/login", post(handlers::login::<C, S>))
        .route("/session", get(handlers::check_session::<C, S>))
        .with_state(state)
        .layer(cors_layer())
}

/// Any origin, `GET`/`POST`, `Content-Type` only
///
/// Preflight requests are answered here and never reach the handlers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([Method::GET, Method::POST]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE]))
}
