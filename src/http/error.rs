//! Structured API error responses.
//!
//! Every failure writes exactly one coherent JSON body of the form
//! `{"code": ..., "message": ...}`. Upstream API rejections keep their
//! status code; transport failures map to 502.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::atlas::AtlasError;

/// Error response carrying a status plus a structured JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Map an upstream failure, keeping API-level status codes.
    ///
    /// `context` names the failed operation (e.g. "GET failed") so the
    /// caller can tell which leg of the proxying broke.
    pub fn from_upstream(err: AtlasError, context: &str) -> Self {
        match err {
            AtlasError::Api {
                status,
                error_code,
                detail,
            } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let code = if error_code.is_empty() {
                    "upstream_error".to_string()
                } else {
                    error_code
                };
                Self {
                    status,
                    code,
                    message: format!("{}: {}", context, detail),
                }
            }
            other => Self {
                status: StatusCode::BAD_GATEWAY,
                code: "upstream_unreachable".to_string(),
                message: format!("{}: {}", context, other),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}
