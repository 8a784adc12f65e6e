//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// 表单使用错误
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("表单未绑定数据或未通过校验，不能保存")]
    NotValid,
}

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("模板渲染错误: {0}")]
    Template(#[from] tera::Error),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("数据无效: {0}")]
    Model(String),
    #[error("资源不存在: {0}")]
    NotFound(String),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Model(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Template(_) | AppError::Form(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, user_message) = match &self {
            AppError::Model(msg) => ("BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            _ => {
                // 内部细节只写日志，不返回给客户端
                error!("请求处理失败: {}", self);
                ("INTERNAL_SERVER_ERROR", "服务器内部错误".to_string())
            }
        };

        let error_response = ErrorResponse {
            error: error_code.to_string(),
            message: user_message,
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("/nope".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Model("price".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Form(FormError::NotValid).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::NotFound("/missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
