//! Speech Commands - 语音合成命令

use crate::domain::speech::SpeechRequestId;

/// 生成语音命令
#[derive(Debug, Clone)]
pub struct GenerateSpeechCommand {
    /// 故事文本；`None` 表示调用方未提供
    pub story: Option<String>,
}

/// 生成语音响应
#[derive(Debug, Clone)]
pub struct GenerateSpeechResponse {
    pub request_id: SpeechRequestId,
    /// 与文本块一一对应、按顺序排列的音频产物名称
    pub audio_paths: Vec<String>,
}
