//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Endpoints
//! - `POST /register` - create a user from `{username, password}`
//! - `POST /login` - verify credentials and issue a session token
//! - `GET /session?token=` - resolve a token to its user name
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Session tokens are UUID v4; only their SHA-256 is persisted
//! - Sessions expire after a fixed TTL (default one hour)
//! - Failed logins never reveal whether the user name exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::repository::{CredentialStore, SessionStore};
pub use error::{AuthError, AuthResult};
pub use infra::memory::{MemoryCredentialStore, MemorySessionStore};
pub use infra::postgres::{PgCredentialStore, PgSessionStore};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
