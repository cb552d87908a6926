//! Fake Text Generator - 用于本地调试的文本生成器
//!
//! 不调用外部服务，根据 prompt 返回固定格式的文本

use async_trait::async_trait;

use crate::application::ports::{GenerationConfig, GenerationError, TextGeneratorPort};

/// Fake Text Generator
///
/// 空 prompt 返回空文本，和真实模型拒答时的表现一致
#[derive(Debug, Default)]
pub struct FakeTextGenerator;

impl FakeTextGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGeneratorPort for FakeTextGenerator {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        tracing::debug!(
            prompt_len = prompt.len(),
            max_output_tokens = config.max_output_tokens,
            "FakeTextGenerator: returning canned story"
        );

        if prompt.is_empty() {
            return Ok(String::new());
        }

        Ok(format!(
            "Once upon a time, a story was requested: \"{}\" The end.",
            prompt
        ))
    }
}
