use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::report::ReportError;
use crate::result::ApiResult;

pub mod error_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_ERROR: i32 = 1000;
    pub const DUPLICATE_IDENTITY: i32 = 1001;
    pub const AUTH_FAILED: i32 = 1002;
    pub const PERMISSION_DENIED: i32 = 1003;
    pub const NOT_FOUND: i32 = 1004;
    pub const ACCOUNT_DISABLED: i32 = 1006;
    pub const GENERATION_FAILED: i32 = 5001;
    pub const INTERNAL_ERROR: i32 = 5000;
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing, malformed, tampered or expired bearer token.
    #[error("Invalid or expired token")]
    Unauthorized,
    /// No active principal with a verifying password. Deliberately carries the
    /// same message whether the email is unknown or the password is wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,
    /// Valid token, wrong role for the guarded route.
    #[error("{0} access required")]
    Forbidden(&'static str),
    /// Credentials verified but the account is flagged inactive.
    #[error("Account is deactivated")]
    AccountDisabled,
    #[error("{0} already registered")]
    DuplicateIdentity(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Document generation failed: {0}")]
    Generation(#[from] ReportError),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Unauthorized | AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, error_codes::AUTH_FAILED)
            }
            AppError::Forbidden(_) => (StatusCode::FORBIDDEN, error_codes::PERMISSION_DENIED),
            AppError::AccountDisabled => (StatusCode::FORBIDDEN, error_codes::ACCOUNT_DISABLED),
            AppError::DuplicateIdentity(_) => {
                (StatusCode::BAD_REQUEST, error_codes::DUPLICATE_IDENTITY)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            AppError::Generation(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::GENERATION_FAILED)
            }
            AppError::Database(_) | AppError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL_ERROR)
            }
        };

        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        }

        // Database details stay in the log, not on the wire.
        let message = match &self {
            AppError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(ApiResult::<()>::error(code, &message))).into_response()
    }
}
