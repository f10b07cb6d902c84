//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Credentials (register / login)
// ============================================================================

/// Body of `POST /register` and `POST /login`
///
/// Both fields are optional at the wire level so that a missing field is
/// reported by the use case rather than as a malformed body. The body is
/// parsed as JSON whatever the request's `Content-Type`.
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

// Password must never reach logs.
impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    /// Session token
    pub session: String,
}

// ============================================================================
// Session
// ============================================================================

/// Query of `GET /session`
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    pub token: Option<String>,
}

impl SessionQuery {
    /// Build from decoded query pairs; the first `token` wins
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            token: pairs
                .into_iter()
                .find(|(key, _)| key == "token")
                .map(|(_, value)| value),
        }
    }
}

/// Session response
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub username: String,
}
