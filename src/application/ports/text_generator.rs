//! Text Generator Port - 文本生成模型抽象
//!
//! 定义文本生成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 文本生成错误
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    /// 错误类别（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkError(_) => "network",
            Self::Timeout => "timeout",
            Self::Unauthorized(_) => "auth",
            Self::QuotaExceeded(_) => "quota",
            Self::ServiceError(_) => "service",
            Self::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// 采样参数
///
/// 固定值，不对用户开放
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
    pub top_k: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            max_output_tokens: 700,
            top_p: 0.8,
            top_k: 40,
        }
    }
}

/// Text Generator Port
///
/// 外部文本生成服务的抽象接口
#[async_trait]
pub trait TextGeneratorPort: Send + Sync {
    /// 提交 prompt，返回模型生成的原始文本（可能为空）
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError>;
}
