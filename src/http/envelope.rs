//! JSON envelope shared by every shape endpoint, and the error type that
//! renders into it.

use crate::core::ShapeKind;
use crate::error::ShapeError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{error, warn};

/// Successful response: `{"success": true, "data": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failed response: `{"success": false, "error": {...}}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Anything a handler can fail with.
#[derive(Debug)]
pub enum ApiError {
    /// A typed error raised by the shape core
    Shape(ShapeError),
    /// Anything else; reported as a 500 without further detail
    Internal(String),
}

impl From<ShapeError> for ApiError {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Shape(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::Shape(err) => ErrorBody {
                code: err.code(),
                message: err.to_string(),
                details: details_for(err),
            },
            Self::Internal(_) => ErrorBody {
                code: "INTERNAL_ERROR",
                message: "Internal server error".to_string(),
                details: None,
            },
        }
    }
}

fn details_for(err: &ShapeError) -> Option<Value> {
    match err {
        ShapeError::InvalidShapeType { value } => Some(json!({
            "shape_type": value,
            "allowed": ShapeKind::ALL,
        })),
        ShapeError::ButtonDisabled => None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Shape(err) => warn!(code = err.code(), "request rejected: {err}"),
            Self::Internal(reason) => error!("API error: {reason}"),
        }

        let body = ErrorResponse {
            success: false,
            error: self.body(),
        };
        (status, Json(body)).into_response()
    }
}
