//! Speech Synthesizer Port - TTS 引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::speech::{AudioEncoding, VoiceProfile};

/// TTS 错误
#[derive(Debug, Error)]
pub enum SpeechError {
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

impl SpeechError {
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

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本（单块）
    pub text: String,
    pub voice: VoiceProfile,
    pub encoding: AudioEncoding,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 编码后的音频数据
    pub audio_data: Vec<u8>,
    pub encoding: AudioEncoding,
}

/// Speech Synthesizer Port
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 执行 TTS 合成
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, SpeechError>;
}
