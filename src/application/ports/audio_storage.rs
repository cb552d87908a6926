//! Audio Storage Port - 出站端口
//!
//! 定义音频产物持久化的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::speech::{AudioEncoding, SpeechRequestId};

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("Failed to create directory {path}: {message}")]
    CreateDirFailed { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },

    #[error("Failed to remove {path}: {message}")]
    RemoveFailed { path: String, message: String },
}

/// 已保存的音频产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    /// 相对于输出目录的名称，返回给调用方
    pub name: String,
    /// 实际写入的文件路径
    pub path: PathBuf,
}

/// Audio Storage Port
///
/// 每个语音请求拥有独立的命名空间，并发请求互不覆盖
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 保存单块音频
    async fn save_part(
        &self,
        request_id: SpeechRequestId,
        index: usize,
        encoding: AudioEncoding,
        data: &[u8],
    ) -> Result<StoredArtifact, AudioStorageError>;

    /// 删除请求下已保存的全部音频；请求不存在时视为成功
    async fn discard(&self, request_id: SpeechRequestId) -> Result<(), AudioStorageError>;
}
