//! 统一错误处理
//!
//! - `UsageError` / `HealthError`: 领域与采集错误
//! - `ApiError`: 实现 `IntoResponse`，统一 HTTP 错误响应

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// CPU 使用率聚合错误
#[derive(Debug, Error, PartialEq)]
pub enum UsageError {
    /// 输入无效：空快照列表、类别集合不一致或总 tick 为 0
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// 健康报告生成错误
#[derive(Debug, Error)]
pub enum HealthError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// OS 采集端失败（如读取 /proc/stat 失败）
    #[error("failed to collect cpu times: {0}")]
    Collect(String),
}

/// API 错误响应结构
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// 统一 API 错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 404 - 资源未找到
    NotFound(String),
    /// 500 - 内部错误
    Internal(String),
}

impl ApiError {
    /// 创建未找到错误
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<HealthError> for ApiError {
    fn from(err: HealthError) -> Self {
        tracing::error!(error = %err, "Health report failed");
        Self::internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("{} not found", resource),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse::new(error_type, message);
        (status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(r) => write!(f, "Not found: {}", r),
            ApiError::Internal(m) => write!(f, "Internal error: {}", m),
        }
    }
}

impl std::error::Error for ApiError {}

/// 便捷类型别名
pub type ApiResult<T> = Result<T, ApiError>;
