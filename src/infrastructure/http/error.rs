//! HTTP Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 参数缺失：以 200 返回 `{"error": ...}`，与原有前端约定一致
    MissingInput(String),
    /// 外部服务失败
    Upstream(String),
    /// 本地错误（文件写入等）
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingInput(msg) => {
                tracing::warn!(error = %msg, "Missing input");
                (StatusCode::OK, msg)
            }
            ApiError::Upstream(msg) => {
                tracing::error!(error = %msg, "Upstream service failure");
                (StatusCode::BAD_GATEWAY, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::MissingInput(msg) => ApiError::MissingInput(msg),
            ApplicationError::LocalFilesystemFailure(_) => ApiError::Internal(e.to_string()),
            ApplicationError::GenerationFailure { .. }
            | ApplicationError::SpeechChunkFailed { .. } => ApiError::Upstream(e.to_string()),
        }
    }
}
