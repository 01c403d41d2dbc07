use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use placard_export::error::ExportError;

/// Unified API error type for all route handlers.
///
/// Every variant is a server-side failure; the message is passed through to
/// the client unchanged.
#[derive(Debug)]
pub enum ApiError {
    Render(String),
    Export(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Render(msg) => {
                tracing::error!("render error: {msg}");
                msg
            }
            ApiError::Export(msg) => {
                tracing::error!("export error: {msg}");
                msg
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        if e.is_render() {
            ApiError::Render(e.to_string())
        } else {
            ApiError::Export(e.to_string())
        }
    }
}
