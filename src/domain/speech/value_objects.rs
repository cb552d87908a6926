//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 语音请求唯一标识，用作音频文件的命名空间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeechRequestId(Uuid);

impl SpeechRequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SpeechRequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SpeechRequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 音频编码，取值与 Text-to-Speech API 的 `audioEncoding` 一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    Mp3,
}

impl AudioEncoding {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }
}

impl Default for AudioEncoding {
    fn default() -> Self {
        Self::Mp3
    }
}

/// 音色配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// 语言区域，如 `en-US`
    pub language_code: String,
    /// 音色名称，如 `en-US-Standard-C`
    pub name: String,
}

impl VoiceProfile {
    pub fn new(language_code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            name: name.into(),
        }
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::new("en-US", "en-US-Standard-C")
    }
}

/// 音频产物名称
///
/// 形如 `{request_id}/output_part_{index}.mp3`，相对于音频输出目录
pub fn artifact_file_name(index: usize, encoding: AudioEncoding) -> String {
    format!("output_part_{}.{}", index, encoding.extension())
}

pub fn artifact_name(request_id: SpeechRequestId, index: usize, encoding: AudioEncoding) -> String {
    format!("{}/{}", request_id, artifact_file_name(index, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_is_namespaced() {
        let id = SpeechRequestId(Uuid::nil());
        assert_eq!(
            artifact_name(id, 2, AudioEncoding::Mp3),
            "00000000-0000-0000-0000-000000000000/output_part_2.mp3"
        );
    }

    #[test]
    fn test_request_ids_differ() {
        assert_ne!(SpeechRequestId::new(), SpeechRequestId::new());
    }

    #[test]
    fn test_encoding_serializes_like_the_vendor_enum() {
        assert_eq!(serde_json::to_string(&AudioEncoding::Mp3).unwrap(), "\"MP3\"");
    }
}
