//! Vertex Text Client - 调用 Vertex AI 文本模型
//!
//! 实现 TextGeneratorPort trait
//!
//! 外部 API:
//! POST {endpoint}/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:predict
//! Request: {"instances": [{"prompt": "..."}], "parameters": {...}}
//! Response: {"predictions": [{"content": "..."}]}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{GenerationConfig, GenerationError, TextGeneratorPort};

#[derive(Debug, Serialize)]
struct PredictInstance<'a> {
    prompt: &'a str,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [PredictInstance<'a>; 1],
    parameters: &'a GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(default)]
    content: Option<String>,
}

/// Vertex 客户端配置
#[derive(Debug, Clone)]
pub struct VertexTextClientConfig {
    /// API 根地址，如 `https://us-central1-aiplatform.googleapis.com`
    pub endpoint: String,
    pub project_id: String,
    pub location: String,
    pub model: String,
    /// Bearer 令牌
    pub access_token: Option<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for VertexTextClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://us-central1-aiplatform.googleapis.com".to_string(),
            project_id: String::new(),
            location: "us-central1".to_string(),
            model: "text-bison@001".to_string(),
            access_token: None,
            timeout_secs: 60,
        }
    }
}

/// Vertex AI 文本生成客户端
pub struct VertexTextClient {
    client: Client,
    config: VertexTextClientConfig,
}

impl VertexTextClient {
    pub fn new(config: VertexTextClientConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GenerationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取 predict URL
    fn predict_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            self.config.endpoint.trim_end_matches('/'),
            self.config.project_id,
            self.config.location,
            self.config.model
        )
    }
}

fn map_status(status: StatusCode, body: String) -> GenerationError {
    let message = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::QuotaExceeded(message),
        _ => GenerationError::ServiceError(message),
    }
}

#[async_trait]
impl TextGeneratorPort for VertexTextClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let url = self.predict_url();
        let body = PredictRequest {
            instances: [PredictInstance { prompt }],
            parameters: config,
        };

        tracing::debug!(
            url = %url,
            prompt_len = prompt.len(),
            "Sending predict request"
        );

        let mut request = self.client.post(&url).json(&body);
        if let Some(token) = &self.config.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout
            } else if e.is_connect() {
                GenerationError::NetworkError(format!("Cannot connect to Vertex AI: {}", e))
            } else {
                GenerationError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(map_status(status, error_text));
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let text = parsed
            .predictions
            .into_iter()
            .next()
            .and_then(|p| p.content)
            .unwrap_or_default();

        tracing::info!(text_len = text.len(), "Predict request completed");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    const PREDICT_PATH: &str =
        "/v1/projects/demo/locations/us-central1/publishers/google/models/text-bison@001:predict";

    fn client_for(server: &mockito::ServerGuard) -> VertexTextClient {
        VertexTextClient::new(VertexTextClientConfig {
            endpoint: server.url(),
            project_id: "demo".into(),
            access_token: Some("test-token".into()),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_fixed_parameters() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", PREDICT_PATH)
            .match_header("authorization", "Bearer test-token")
            .match_body(Matcher::Json(serde_json::json!({
                "instances": [{"prompt": "Tell a story"}],
                "parameters": {
                    "temperature": 1.0,
                    "maxOutputTokens": 700,
                    "topP": 0.8,
                    "topK": 40
                }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"predictions":[{"content":"A brave robot."}]}"#)
            .create_async()
            .await;

        let text = client_for(&server)
            .generate("Tell a story", &GenerationConfig::default())
            .await
            .unwrap();

        assert_eq!(text, "A brave robot.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_prediction_is_empty_text() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PREDICT_PATH)
            .with_status(200)
            .with_body(r#"{"predictions":[]}"#)
            .create_async()
            .await;

        let text = client_for(&server)
            .generate("", &GenerationConfig::default())
            .await
            .unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn test_error_statuses_are_classified() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", PREDICT_PATH)
            .with_status(429)
            .with_body("quota")
            .create_async()
            .await;

        let err = client_for(&server)
            .generate("x", &GenerationConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::QuotaExceeded(_)));
    }

    #[test]
    fn test_map_status() {
        assert!(matches!(
            map_status(StatusCode::FORBIDDEN, String::new()),
            GenerationError::Unauthorized(_)
        ));
        assert!(matches!(
            map_status(StatusCode::INTERNAL_SERVER_ERROR, String::new()),
            GenerationError::ServiceError(_)
        ));
    }
}
