// crates/directory-lib/src/error.rs

//! Central error type + Axum integration.
use account_directory_common::Response as DirectoryResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Failures raised by directory operations.
///
/// Only operations that require an existing account raise these. A missing
/// account during `login`, a duplicate username, a wrong password or a
/// wrong token are reported as `false`, not as errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid reset token format: token must consist of 6 digits")]
    InvalidTokenFormat,
}

impl DirectoryError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::UserNotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::InvalidTokenFormat => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DirectoryError::UserNotFound(_) => "USER_001",
            DirectoryError::InvalidTokenFormat => "TOKEN_001",
        }
    }

    /// Get a sanitized message suitable for production use
    pub fn sanitized_message(&self) -> String {
        match self {
            DirectoryError::UserNotFound(_) => "Resource not found".to_string(),
            DirectoryError::InvalidTokenFormat => "Invalid reset token".to_string(),
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();

        // Detailed messages in development, sanitized in production
        let message = if cfg!(debug_assertions) {
            self.to_string()
        } else {
            self.sanitized_message()
        };

        let body = serde_json::json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<DirectoryError> for DirectoryResponse {
    fn from(err: DirectoryError) -> Self {
        DirectoryResponse::Error {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}
