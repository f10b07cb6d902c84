//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration body lacks a user name or password
    #[error("Username and password required")]
    MissingCredentials,

    /// User name already exists
    #[error("Username already exists")]
    UserNameTaken,

    /// Unknown user or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Session check without a token
    #[error("Missing session token")]
    MissingSessionToken,

    /// Session not found or expired
    #[error("Session not found or expired")]
    SessionNotFound,

    /// Request body is not the expected JSON object
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials
            | AuthError::UserNameTaken
            | AuthError::MissingSessionToken
            | AuthError::InvalidBody(_) => ErrorKind::BadRequest,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::SessionNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message safe to return to the client
    ///
    /// Store and internal failures collapse to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        if self.kind().is_server_error() {
            tracing::error!(error = %self, "Auth request failed");
            return;
        }
        match self {
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidBody(e) => {
                tracing::debug!(error = %e, "Rejected request body");
            }
            _ => {
                tracing::debug!(error = %self, "Auth request rejected");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::new(err.kind(), err.public_message())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn body_json(err: AuthError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn test_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingCredentials, StatusCode::BAD_REQUEST),
            (AuthError::UserNameTaken, StatusCode::BAD_REQUEST),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::MissingSessionToken, StatusCode::BAD_REQUEST),
            (AuthError::SessionNotFound, StatusCode::NOT_FOUND),
            (
                AuthError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.kind().status_code(), expected_status.as_u16());
        }
    }

    #[tokio::test]
    async fn test_error_body_messages() {
        let cases = [
            (AuthError::MissingCredentials, "Username and password required"),
            (AuthError::UserNameTaken, "Username already exists"),
            (AuthError::InvalidCredentials, "Invalid username or password"),
            (AuthError::MissingSessionToken, "Missing session token"),
            (AuthError::SessionNotFound, "Session not found or expired"),
        ];

        for (error, message) in cases {
            let expected_status = error.kind().status_code();
            let (status, body) = body_json(error).await;
            assert_eq!(status.as_u16(), expected_status);
            assert_eq!(body, serde_json::json!({ "error": message }));
        }
    }

    #[tokio::test]
    async fn test_internal_errors_do_not_leak() {
        let (status, body) = body_json(AuthError::Database(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));

        let (_, body) = body_json(AuthError::Internal("secret detail".into())).await;
        assert!(!body.to_string().contains("secret detail"));
    }

    #[tokio::test]
    async fn test_invalid_body_hides_parser_detail() {
        let parse_err = serde_json::from_slice::<serde_json::Value>(b"{\"username\"").unwrap_err();
        let (status, body) = body_json(AuthError::InvalidBody(parse_err)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "error": "Invalid request body" }));
    }
}
