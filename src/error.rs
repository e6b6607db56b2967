use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::cars::store::StoreError;

/// Body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    /// Absent record and foreign record are reported the same way.
    #[error("car not found or not owned by caller")]
    NotFoundOrForbidden,
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    #[error("request rejected: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFoundOrForbidden => StatusCode::NOT_FOUND,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::Validation(message) => message,
            AppError::NotFoundOrForbidden => {
                "Car not found or you do not have permission to access it".into()
            }
            // details stay in the logs
            AppError::Storage(_) => "Internal storage error".into(),
            AppError::Unauthorized(reason) => reason.into(),
            AppError::Rejected { message, .. } => message,
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation(rejection.body_text())
            }
            other => AppError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}
