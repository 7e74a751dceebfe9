// Error handling types for the API

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use super::validation::ValidationResult;

/// Every failure a request can end in. The set is closed: handlers and
/// services only ever surface one of these.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("validation error: {0}")]
    Validation(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidCredentials => "invalid-credentials",
            ApiError::AuthenticationRequired => "authentication-required",
            ApiError::Validation(_) => "validation-error",
            ApiError::MalformedInput(_) => "malformed-input",
            ApiError::NotFound(_) => "not-found",
            ApiError::Conflict(_) => "conflict-error",
            ApiError::Internal(_) => "internal-error",
        }
    }

    /// Classifies a failed DELETE. A foreign-key violation here means the row
    /// is still referenced, which is a conflict rather than bad input.
    pub fn from_delete(err: sqlx::Error) -> Self {
        if is_foreign_key_violation(&err) {
            return ApiError::Conflict("resource is still referenced.".to_string());
        }
        ApiError::from(err)
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_foreign_key_violation())
        .unwrap_or(false)
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return ApiError::NotFound("resource not found".to_string());
        }

        if let Some(db) = err.as_database_error() {
            if db.is_unique_violation() {
                return ApiError::Conflict("resource already exists.".to_string());
            }
            if db.is_foreign_key_violation() {
                return ApiError::Validation("referenced resource does not exist.".to_string());
            }
        }

        ApiError::Internal(format!("database error: {}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedInput(rejection.body_text())
    }
}

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = self.code();

        let message = match &self {
            ApiError::Internal(detail) => {
                error!(error = %detail, "Internal error while handling request");
                "internal error".to_string()
            }
            ApiError::InvalidCredentials | ApiError::AuthenticationRequired => self.to_string(),
            ApiError::Validation(msg)
            | ApiError::MalformedInput(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg) => msg.clone(),
        };

        let error_response = ErrorResponse {
            error: message,
            code: code.to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Helper function to convert ValidationResult to ApiError
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::Internal("Validation result was valid but converted to error".to_string())
        } else {
            let error_messages: Vec<String> = result
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
            ApiError::Validation(error_messages.join(", "))
        }
    }
}
