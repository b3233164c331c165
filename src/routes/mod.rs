use axum::{
    Json,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::result::ApiResult;

pub mod admin;
pub mod auth;
pub mod faculty;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub async fn health() -> Json<ApiResult<HealthResponse>> {
    Json(ApiResult::success(HealthResponse {
        status: "healthy".into(),
        message: "Faculty Management System is running".into(),
    }))
}

/// Wraps a compiled export buffer as a downloadable attachment.
pub(crate) fn attachment(bytes: Vec<u8>, content_type: &str, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}
