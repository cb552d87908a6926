//! Fake TTS Client - 用于本地调试的 TTS 客户端
//!
//! 不实际调用 TTS 服务，始终返回同一段音频

use async_trait::async_trait;
use std::path::Path;

use crate::application::ports::{
    SpeechError, SpeechSynthesizerPort, SynthesisRequest, SynthesisResponse,
};

/// MPEG-1 Layer III 帧头（128kbps, 44.1kHz）
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// 该码率下单帧字节数
const MP3_FRAME_LEN: usize = 417;

fn silent_frame() -> Vec<u8> {
    let mut frame = MP3_FRAME_HEADER.to_vec();
    frame.resize(MP3_FRAME_LEN, 0);
    frame
}

/// Fake TTS Client
pub struct FakeTtsClient {
    audio_data: Vec<u8>,
}

impl FakeTtsClient {
    /// 返回一帧静音
    pub fn new() -> Self {
        Self {
            audio_data: silent_frame(),
        }
    }

    /// 返回指定文件内容
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        let audio_data = std::fs::read(path)?;
        tracing::info!(path = %path.display(), "FakeTtsClient initialized");
        Ok(Self { audio_data })
    }
}

impl Default for FakeTtsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, SpeechError> {
        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice.name,
            "FakeTtsClient: returning fixed audio"
        );

        Ok(SynthesisResponse {
            audio_data: self.audio_data.clone(),
            encoding: request.encoding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::speech::{AudioEncoding, VoiceProfile};
    use std::io::Write;

    #[tokio::test]
    async fn test_returns_silent_frame() {
        let response = FakeTtsClient::new()
            .synthesize(SynthesisRequest {
                text: "hello".into(),
                voice: VoiceProfile::default(),
                encoding: AudioEncoding::Mp3,
            })
            .await
            .unwrap();

        assert_eq!(response.audio_data.len(), MP3_FRAME_LEN);
        assert_eq!(&response.audio_data[..4], &MP3_FRAME_HEADER);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"clip").unwrap();

        let client = FakeTtsClient::from_file(file.path()).unwrap();
        assert_eq!(client.audio_data, b"clip");
    }
}
