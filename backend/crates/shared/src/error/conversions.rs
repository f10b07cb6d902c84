//! Error conversions
//!
//! HTTP rendering of [`AppError`].

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // { "error": "<message>" }
        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}
