//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, GenerationError, SpeechError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 必填参数缺失
    #[error("{0}")]
    MissingInput(String),

    /// 文本生成服务调用失败
    #[error("text generation failed ({kind}): {message}")]
    GenerationFailure { kind: &'static str, message: String },

    /// 某一块语音合成失败，整个请求失败
    #[error("speech synthesis failed for chunk {index} ({kind}): {message}")]
    SpeechChunkFailed {
        index: usize,
        kind: &'static str,
        message: String,
    },

    /// 音频文件写入失败
    #[error("Local filesystem failure: {0}")]
    LocalFilesystemFailure(String),
}

impl ApplicationError {
    /// 创建参数缺失错误
    pub fn missing_input(message: impl Into<String>) -> Self {
        Self::MissingInput(message.into())
    }

    /// 语音合成块失败
    pub fn speech_chunk(index: usize, err: SpeechError) -> Self {
        Self::SpeechChunkFailed {
            index,
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<GenerationError> for ApplicationError {
    fn from(err: GenerationError) -> Self {
        Self::GenerationFailure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<AudioStorageError> for ApplicationError {
    fn from(err: AudioStorageError) -> Self {
        Self::LocalFilesystemFailure(err.to_string())
    }
}
