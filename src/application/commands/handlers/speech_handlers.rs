//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{GenerateSpeechCommand, GenerateSpeechResponse};
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioStoragePort, SpeechSynthesizerPort, SynthesisRequest};
use crate::domain::speech::{
    split_into_chunks, AudioEncoding, SpeechRequestId, TextChunk, VoiceProfile,
};

/// 缺少故事文本时返回的错误信息
pub const NO_STORY_PROVIDED: &str = "No story provided";

/// GenerateSpeech Handler - 分块、逐块合成并保存
pub struct GenerateSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    storage: Arc<dyn AudioStoragePort>,
    voice: VoiceProfile,
    encoding: AudioEncoding,
}

impl GenerateSpeechHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        storage: Arc<dyn AudioStoragePort>,
        voice: VoiceProfile,
    ) -> Self {
        Self {
            synthesizer,
            storage,
            voice,
            encoding: AudioEncoding::Mp3,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateSpeechCommand,
    ) -> Result<GenerateSpeechResponse, ApplicationError> {
        let story = cmd
            .story
            .ok_or_else(|| ApplicationError::missing_input(NO_STORY_PROVIDED))?;

        let request_id = SpeechRequestId::new();
        let chunks = split_into_chunks(&story);

        tracing::info!(
            request_id = %request_id,
            story_chars = story.chars().count(),
            chunks = chunks.len(),
            "Generating speech"
        );

        let audio_paths = match self.synthesize_parts(request_id, &chunks).await {
            Ok(paths) => paths,
            Err(e) => {
                // 失败的请求不返回任何路径，已写入的片段一并清除
                if let Err(discard_err) = self.storage.discard(request_id).await {
                    tracing::warn!(
                        request_id = %request_id,
                        error = %discard_err,
                        "Failed to discard partial audio"
                    );
                }
                return Err(e);
            }
        };

        tracing::info!(
            request_id = %request_id,
            parts = audio_paths.len(),
            "Speech generated"
        );

        Ok(GenerateSpeechResponse {
            request_id,
            audio_paths,
        })
    }

    /// 逐块合成并保存，任意一块失败即返回
    async fn synthesize_parts(
        &self,
        request_id: SpeechRequestId,
        chunks: &[TextChunk<'_>],
    ) -> Result<Vec<String>, ApplicationError> {
        let mut audio_paths = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            let response = self
                .synthesizer
                .synthesize(SynthesisRequest {
                    text: chunk.content.to_string(),
                    voice: self.voice.clone(),
                    encoding: self.encoding,
                })
                .await
                .map_err(|e| {
                    tracing::error!(
                        request_id = %request_id,
                        chunk_index = chunk.index,
                        kind = e.kind(),
                        error = %e,
                        "Speech synthesis failed"
                    );
                    ApplicationError::speech_chunk(chunk.index, e)
                })?;

            let artifact = self
                .storage
                .save_part(request_id, chunk.index, response.encoding, &response.audio_data)
                .await
                .map_err(|e| {
                    tracing::error!(
                        request_id = %request_id,
                        chunk_index = chunk.index,
                        error = %e,
                        "Failed to persist audio part"
                    );
                    ApplicationError::from(e)
                })?;

            tracing::debug!(
                request_id = %request_id,
                chunk_index = chunk.index,
                chunk_chars = chunk.char_count(),
                audio_size = response.audio_data.len(),
                path = %artifact.path.display(),
                "Audio part saved"
            );

            audio_paths.push(artifact.name);
        }

        Ok(audio_paths)
    }
}
