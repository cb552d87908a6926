//! Google TTS Client - 调用 Cloud Text-to-Speech 服务
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! 外部 TTS API:
//! POST {endpoint}/v1/text:synthesize
//! Request: {"input": {"text": "..."}, "voice": {...}, "audioConfig": {"audioEncoding": "MP3"}}
//! Response: {"audioContent": "<base64>"}

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{
    SpeechError, SpeechSynthesizerPort, SynthesisRequest, SynthesisResponse,
};
use crate::domain::speech::AudioEncoding;

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelectionParams<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfigParams {
    audio_encoding: AudioEncoding,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeHttpRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelectionParams<'a>,
    audio_config: AudioConfigParams,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeHttpResponse {
    audio_content: String,
}

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// TTS 服务基础 URL
    pub endpoint: String,
    /// Bearer 令牌
    pub access_token: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://texttospeech.googleapis.com".to_string(),
            access_token: None,
            timeout_secs: 60,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google TTS 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
}

impl GoogleTtsClient {
    pub fn new(config: GoogleTtsClientConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn synthesize_url(&self) -> String {
        format!("{}/v1/text:synthesize", self.config.endpoint.trim_end_matches('/'))
    }
}

fn map_status(status: StatusCode, body: String) -> SpeechError {
    let message = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SpeechError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => SpeechError::QuotaExceeded(message),
        _ => SpeechError::ServiceError(message),
    }
}

#[async_trait]
impl SpeechSynthesizerPort for GoogleTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, SpeechError> {
        let url = self.synthesize_url();
        let body = SynthesizeHttpRequest {
            input: SynthesisInput {
                text: &request.text,
            },
            voice: VoiceSelectionParams {
                language_code: &request.voice.language_code,
                name: &request.voice.name,
            },
            audio_config: AudioConfigParams {
                audio_encoding: request.encoding,
            },
        };

        tracing::debug!(
            url = %url,
            text_len = request.text.len(),
            voice = %request.voice.name,
            "Sending TTS synthesize request"
        );

        let mut http_request = self.client.post(&url).json(&body);
        if let Some(token) = &self.config.access_token {
            http_request = http_request.bearer_auth(token);
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                SpeechError::Timeout
            } else if e.is_connect() {
                SpeechError::NetworkError(format!("Cannot connect to TTS service: {}", e))
            } else {
                SpeechError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_status(status, error_text));
        }

        let parsed: SynthesizeHttpResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        let audio_data = base64::engine::general_purpose::STANDARD
            .decode(parsed.audio_content.as_bytes())
            .map_err(|e| SpeechError::InvalidResponse(format!("Invalid audioContent: {}", e)))?;

        tracing::info!(
            audio_size = audio_data.len(),
            encoding = ?request.encoding,
            "TTS synthesis completed"
        );

        Ok(SynthesisResponse {
            audio_data,
            encoding: request.encoding,
        })
    }
}
