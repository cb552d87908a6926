//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait
//!
//! 目录结构: `{base_dir}/{request_id}/output_part_{index}.mp3`

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort, StoredArtifact};
use crate::domain::speech::{artifact_file_name, artifact_name, AudioEncoding, SpeechRequestId};

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储，确保根目录存在
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::CreateDirFailed {
                path: base_dir.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// 获取请求的音频目录
    pub fn request_dir(&self, request_id: SpeechRequestId) -> PathBuf {
        self.base_dir.join(request_id.to_string())
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    async fn save_part(
        &self,
        request_id: SpeechRequestId,
        index: usize,
        encoding: AudioEncoding,
        data: &[u8],
    ) -> Result<StoredArtifact, AudioStorageError> {
        let request_dir = self.request_dir(request_id);

        fs::create_dir_all(&request_dir)
            .await
            .map_err(|e| AudioStorageError::CreateDirFailed {
                path: request_dir.display().to_string(),
                message: e.to_string(),
            })?;

        let path = request_dir.join(artifact_file_name(index, encoding));

        fs::write(&path, data)
            .await
            .map_err(|e| AudioStorageError::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Saved audio: request={}, part={}, size={} bytes",
            request_id,
            index,
            data.len()
        );

        Ok(StoredArtifact {
            name: artifact_name(request_id, index, encoding),
            path,
        })
    }

    async fn discard(&self, request_id: SpeechRequestId) -> Result<(), AudioStorageError> {
        let request_dir = self.request_dir(request_id);

        match fs::remove_dir_all(&request_dir).await {
            Ok(()) => {
                tracing::debug!("Discarded audio: request={}", request_id);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AudioStorageError::RemoveFailed {
                path: request_dir.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_part_writes_namespaced_file() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let request_id = SpeechRequestId::new();
        let artifact = storage
            .save_part(request_id, 0, AudioEncoding::Mp3, b"fake mp3 data")
            .await
            .unwrap();

        assert_eq!(artifact.name, format!("{}/output_part_0.mp3", request_id));
        assert_eq!(artifact.path, temp_dir.path().join(&artifact.name));
        assert_eq!(std::fs::read(&artifact.path).unwrap(), b"fake mp3 data");
    }

    #[tokio::test]
    async fn test_requests_do_not_overwrite_each_other() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let first = SpeechRequestId::new();
        let second = SpeechRequestId::new();

        let (a, b) = tokio::join!(
            storage.save_part(first, 0, AudioEncoding::Mp3, b"first"),
            storage.save_part(second, 0, AudioEncoding::Mp3, b"second"),
        );
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.path, b.path);
        assert_eq!(std::fs::read(&a.path).unwrap(), b"first");
        assert_eq!(std::fs::read(&b.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_discard_removes_only_that_request() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let dropped = SpeechRequestId::new();
        let kept = SpeechRequestId::new();
        storage
            .save_part(dropped, 0, AudioEncoding::Mp3, b"partial")
            .await
            .unwrap();
        let kept_part = storage
            .save_part(kept, 0, AudioEncoding::Mp3, b"complete")
            .await
            .unwrap();

        storage.discard(dropped).await.unwrap();

        assert!(!storage.request_dir(dropped).exists());
        assert_eq!(std::fs::read(&kept_part.path).unwrap(), b"complete");
        // 重复删除不报错
        storage.discard(dropped).await.unwrap();
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();
        let request_id = SpeechRequestId::new();

        // 用同名普通文件占住请求目录
        std::fs::write(storage.request_dir(request_id), b"not a dir").unwrap();

        let err = storage
            .save_part(request_id, 0, AudioEncoding::Mp3, b"data")
            .await
            .unwrap_err();
        assert!(matches!(err, AudioStorageError::CreateDirFailed { .. }));
    }
}
