//! # Error Handling Middleware
//!
//! Maps board errors to HTTP status codes and JSON error bodies so every
//! handler fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookboard_core::errors::BoardError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use bookboard_api::middleware::error_handling::AppError;
/// use bookboard_core::errors::BoardError;
///
/// async fn handler() -> Result<Json<Vec<String>>, AppError> {
///     Err(AppError(BoardError::Malformed("expected an array".to_string())))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub BoardError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BoardError::Malformed(_) => StatusCode::BAD_REQUEST,
            BoardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BoardError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `BoardResult` inside handlers.
impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        AppError(err)
    }
}
