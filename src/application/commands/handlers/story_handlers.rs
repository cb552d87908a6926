//! Story Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateStoryCommand, GenerateStoryResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{GenerationConfig, TextGeneratorPort};
use crate::domain::story::build_prompt;

/// GenerateStory Handler - 构造 prompt 并调用文本模型
pub struct GenerateStoryHandler {
    generator: Arc<dyn TextGeneratorPort>,
    config: GenerationConfig,
}

impl GenerateStoryHandler {
    pub fn new(generator: Arc<dyn TextGeneratorPort>) -> Self {
        Self {
            generator,
            config: GenerationConfig::default(),
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateStoryCommand,
    ) -> Result<GenerateStoryResponse, ApplicationError> {
        let prompt = build_prompt(&cmd.request);

        if prompt.is_empty() {
            tracing::warn!(
                prompt_length = %cmd.request.length_mode,
                "Unrecognized prompt length, sending empty prompt"
            );
        }

        tracing::info!(
            genre = %cmd.request.genre,
            grade_level = %cmd.request.grade_level,
            prompt_length = %cmd.request.length_mode,
            prompt_chars = prompt.chars().count(),
            "Generating story"
        );

        let text = self
            .generator
            .generate(&prompt, &self.config)
            .await
            .map_err(|e| {
                tracing::error!(kind = e.kind(), error = %e, "Story generation failed");
                ApplicationError::from(e)
            })?;

        if text.trim().is_empty() {
            tracing::warn!("Text model returned an empty story");
        } else {
            tracing::info!(story_chars = text.chars().count(), "Story generated");
        }

        Ok(GenerateStoryResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::GenerationError;
    use crate::domain::story::StoryRequest;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 记录收到的 prompt 和参数
    #[derive(Default)]
    struct RecordingGenerator {
        calls: Mutex<Vec<(String, GenerationConfig)>>,
        reply: String,
    }

    #[async_trait]
    impl TextGeneratorPort for RecordingGenerator {
        async fn generate(
            &self,
            prompt: &str,
            config: &GenerationConfig,
        ) -> Result<String, GenerationError> {
            self.calls.lock().unwrap().push((prompt.to_string(), *config));
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGeneratorPort for FailingGenerator {
        async fn generate(
            &self,
            _prompt: &str,
            _config: &GenerationConfig,
        ) -> Result<String, GenerationError> {
            Err(GenerationError::Unauthorized("invalid token".into()))
        }
    }

    #[tokio::test]
    async fn test_prompt_forwarded_unmodified_with_fixed_config() {
        let generator = Arc::new(RecordingGenerator {
            reply: "Once upon a time".into(),
            ..Default::default()
        });
        let handler = GenerateStoryHandler::new(generator.clone());

        let request = StoryRequest::from_params(
            Some("Fantasy".into()),
            Some("Toddler".into()),
            Some("long".into()),
        );
        let expected_prompt = build_prompt(&request);
        let result = handler
            .handle(GenerateStoryCommand { request })
            .await
            .unwrap();

        assert_eq!(result.text, "Once upon a time");
        let calls = generator.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, expected_prompt);
        assert!(calls[0]
            .0
            .starts_with("Write a creative Fantasy story for Toddler graders over 350 words"));
        assert_eq!(calls[0].1, GenerationConfig::default());
        assert_eq!(calls[0].1.max_output_tokens, 700);
        assert_eq!(calls[0].1.top_k, 40);
    }

    #[tokio::test]
    async fn test_empty_output_is_not_an_error() {
        let generator = Arc::new(RecordingGenerator::default());
        let handler = GenerateStoryHandler::new(generator);

        let result = handler
            .handle(GenerateStoryCommand {
                request: StoryRequest::default(),
            })
            .await
            .unwrap();
        assert!(result.text.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_length_still_calls_model_with_empty_prompt() {
        let generator = Arc::new(RecordingGenerator::default());
        let handler = GenerateStoryHandler::new(generator.clone());

        handler
            .handle(GenerateStoryCommand {
                request: StoryRequest::from_params(None, None, Some("epic".into())),
            })
            .await
            .unwrap();

        assert_eq!(generator.calls.lock().unwrap()[0].0, "");
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let handler = GenerateStoryHandler::new(Arc::new(FailingGenerator));

        let err = handler
            .handle(GenerateStoryCommand {
                request: StoryRequest::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::GenerationFailure { kind: "auth", .. }
        ));
    }
}
