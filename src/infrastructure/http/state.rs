//! Application State
//!
//! 请求之间只共享只读的适配器与处理器

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{
    AudioStoragePort, GenerateSpeechHandler, GenerateStoryHandler, SpeechSynthesizerPort,
    TextGeneratorPort,
};
use crate::domain::speech::VoiceProfile;

/// 应用状态
pub struct AppState {
    /// 音频输出目录，`/audio` 路由从这里读取
    pub audio_dir: PathBuf,

    // ========== Command Handlers ==========
    pub generate_story_handler: GenerateStoryHandler,
    pub generate_speech_handler: GenerateSpeechHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        text_generator: Arc<dyn TextGeneratorPort>,
        speech_synthesizer: Arc<dyn SpeechSynthesizerPort>,
        audio_storage: Arc<dyn AudioStoragePort>,
        voice: VoiceProfile,
        audio_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            audio_dir: audio_dir.into(),
            generate_story_handler: GenerateStoryHandler::new(text_generator),
            generate_speech_handler: GenerateSpeechHandler::new(
                speech_synthesizer,
                audio_storage,
                voice,
            ),
        }
    }
}
