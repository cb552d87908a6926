//! Story Backend - 后端接口客户端
//!
//! 对应服务端的 `GET /generate` 与 `GET /speech`

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::domain::story::StoryRequest;

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to reach backend: {0}")]
    Network(String),

    #[error("Backend returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Backend rejected request: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response received from the backend")]
    EmptyStory,

    #[error("Generate a story before requesting speech")]
    NoStory,
}

/// 后端抽象，便于替换为测试实现
#[async_trait]
pub trait StoryBackend: Send + Sync {
    /// 请求生成故事，返回原始文本（可能为空）
    async fn generate(&self, request: &StoryRequest) -> Result<String, ClientError>;

    /// 请求生成语音，返回按顺序排列的音频产物名称
    async fn speech(&self, story: &str) -> Result<Vec<String>, ClientError>;
}

/// `/generate` 和 `/speech` 的响应都可能是 `{"error": ...}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Error { error: String },
    Ok(T),
}

#[derive(Debug, Deserialize)]
struct GenerateBody {
    response: String,
}

#[derive(Debug, Deserialize)]
struct SpeechBody {
    audio_paths: Vec<String>,
}

/// HTTP 后端客户端
pub struct HttpStoryBackend {
    client: Client,
    base_url: String,
}

impl HttpStoryBackend {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// 音频片段的下载地址
    pub fn audio_url(&self, artifact: &str) -> String {
        format!("{}/audio/{}", self.base_url, artifact)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        let envelope: Envelope<T> = match serde_json::from_str(&text) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Http {
                    status: status.as_u16(),
                    message: text,
                })
            }
            Err(e) => return Err(ClientError::InvalidResponse(e.to_string())),
        };

        match envelope {
            Envelope::Ok(body) if status.is_success() => Ok(body),
            Envelope::Ok(_) => Err(ClientError::Http {
                status: status.as_u16(),
                message: text,
            }),
            Envelope::Error { error } if status.is_success() => Err(ClientError::Rejected(error)),
            Envelope::Error { error } => Err(ClientError::Http {
                status: status.as_u16(),
                message: error,
            }),
        }
    }
}

#[async_trait]
impl StoryBackend for HttpStoryBackend {
    async fn generate(&self, request: &StoryRequest) -> Result<String, ClientError> {
        let body: GenerateBody = self
            .get(
                "/generate",
                &[
                    ("movie_genre", request.genre.as_str()),
                    ("grade_level", request.grade_level.as_str()),
                    ("prompt_length", request.length_mode.as_str()),
                ],
            )
            .await?;
        Ok(body.response)
    }

    async fn speech(&self, story: &str) -> Result<Vec<String>, ClientError> {
        let body: SpeechBody = self.get("/speech", &[("story", story)]).await?;
        Ok(body.audio_paths)
    }
}
