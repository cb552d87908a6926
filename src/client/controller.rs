//! Client Controller - 客户端状态机
//!
//! 状态: `Idle → StoryReady → SpeechReady`
//!
//! - 故事生成失败或返回空文本时保持当前状态
//! - 语音生成失败不影响已生成的故事
//! - 没有故事时请求语音会在本地拒绝，不发送请求

use std::sync::Arc;

use super::backend::{ClientError, StoryBackend};
use crate::domain::story::StoryRequest;

/// 客户端状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientState {
    Idle,
    StoryReady {
        story: String,
    },
    SpeechReady {
        story: String,
        /// 按返回顺序排列的音频片段
        audio_clips: Vec<String>,
    },
}

impl ClientState {
    pub fn story(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::StoryReady { story } | Self::SpeechReady { story, .. } => Some(story),
        }
    }

    pub fn audio_clips(&self) -> &[String] {
        match self {
            Self::SpeechReady { audio_clips, .. } => audio_clips,
            _ => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::StoryReady { .. } => "story_ready",
            Self::SpeechReady { .. } => "speech_ready",
        }
    }
}

/// 客户端控制器
///
/// 单线程事件驱动：每个操作都需要 `&mut self`，状态转换不会交错
pub struct ClientController {
    backend: Arc<dyn StoryBackend>,
    state: ClientState,
}

impl ClientController {
    pub fn new(backend: Arc<dyn StoryBackend>) -> Self {
        Self {
            backend,
            state: ClientState::Idle,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    /// 提交表单，成功后进入 `StoryReady`
    pub async fn submit_story(&mut self, request: &StoryRequest) -> Result<&str, ClientError> {
        let text = self.backend.generate(request).await.map_err(|e| {
            tracing::error!(error = %e, state = self.state.name(), "Failed to generate story");
            e
        })?;

        if text.trim().is_empty() {
            tracing::error!(state = self.state.name(), "Empty response received from the backend");
            return Err(ClientError::EmptyStory);
        }

        tracing::info!(story_chars = text.chars().count(), "Story ready");
        self.state = ClientState::StoryReady { story: text };
        Ok(self.state.story().unwrap_or_default())
    }

    /// 为当前故事请求语音，成功后进入 `SpeechReady`
    pub async fn request_speech(&mut self) -> Result<&[String], ClientError> {
        let Some(story) = self.state.story().map(str::to_string) else {
            tracing::warn!("Speech requested before a story was generated");
            return Err(ClientError::NoStory);
        };

        let audio_clips = self.backend.speech(&story).await.map_err(|e| {
            tracing::error!(error = %e, state = self.state.name(), "Failed to generate speech");
            e
        })?;

        tracing::info!(clips = audio_clips.len(), "Speech ready");
        self.state = ClientState::SpeechReady { story, audio_clips };
        Ok(self.state.audio_clips())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// 按顺序返回预设结果，并记录调用
    #[derive(Default)]
    struct ScriptedBackend {
        stories: Mutex<VecDeque<Result<String, ClientError>>>,
        speeches: Mutex<VecDeque<Result<Vec<String>, ClientError>>>,
        speech_inputs: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        fn with_story(self, reply: Result<&str, ClientError>) -> Self {
            self.stories
                .lock()
                .unwrap()
                .push_back(reply.map(str::to_string));
            self
        }

        fn with_speech(self, reply: Result<Vec<&str>, ClientError>) -> Self {
            self.speeches
                .lock()
                .unwrap()
                .push_back(reply.map(|v| v.into_iter().map(str::to_string).collect()));
            self
        }
    }

    #[async_trait]
    impl StoryBackend for ScriptedBackend {
        async fn generate(&self, _request: &StoryRequest) -> Result<String, ClientError> {
            self.stories
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected generate call")
        }

        async fn speech(&self, story: &str) -> Result<Vec<String>, ClientError> {
            self.speech_inputs.lock().unwrap().push(story.to_string());
            self.speeches
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected speech call")
        }
    }

    #[tokio::test]
    async fn test_happy_path() {
        let backend = Arc::new(
            ScriptedBackend::default()
                .with_story(Ok("A tale."))
                .with_speech(Ok(vec!["r/output_part_0.mp3", "r/output_part_1.mp3"])),
        );
        let mut controller = ClientController::new(backend.clone());

        let story = controller
            .submit_story(&StoryRequest::default())
            .await
            .unwrap()
            .to_string();
        assert_eq!(story, "A tale.");
        assert_eq!(controller.state().name(), "story_ready");

        let clips = controller.request_speech().await.unwrap().to_vec();
        assert_eq!(clips, vec!["r/output_part_0.mp3", "r/output_part_1.mp3"]);
        assert_eq!(
            controller.state(),
            &ClientState::SpeechReady {
                story: "A tale.".into(),
                audio_clips: clips,
            }
        );
        assert_eq!(*backend.speech_inputs.lock().unwrap(), vec!["A tale."]);
    }

    #[tokio::test]
    async fn test_speech_in_idle_is_rejected_locally() {
        let backend = Arc::new(ScriptedBackend::default());
        let mut controller = ClientController::new(backend.clone());

        let err = controller.request_speech().await.unwrap_err();

        assert!(matches!(err, ClientError::NoStory));
        assert!(backend.speech_inputs.lock().unwrap().is_empty());
        assert_eq!(controller.state(), &ClientState::Idle);
    }

    #[tokio::test]
    async fn test_empty_story_stays_idle() {
        let backend = Arc::new(ScriptedBackend::default().with_story(Ok("  ")));
        let mut controller = ClientController::new(backend);

        let err = controller
            .submit_story(&StoryRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::EmptyStory));
        assert_eq!(controller.state(), &ClientState::Idle);
    }

    #[tokio::test]
    async fn test_generate_failure_stays_idle() {
        let backend = Arc::new(
            ScriptedBackend::default().with_story(Err(ClientError::Network("refused".into()))),
        );
        let mut controller = ClientController::new(backend);

        assert!(controller.submit_story(&StoryRequest::default()).await.is_err());
        assert_eq!(controller.state(), &ClientState::Idle);
    }

    #[tokio::test]
    async fn test_speech_failure_keeps_story() {
        let backend = Arc::new(
            ScriptedBackend::default()
                .with_story(Ok("Kept."))
                .with_speech(Err(ClientError::Http {
                    status: 502,
                    message: "chunk 0".into(),
                })),
        );
        let mut controller = ClientController::new(backend);

        controller.submit_story(&StoryRequest::default()).await.unwrap();
        assert!(controller.request_speech().await.is_err());

        assert_eq!(
            controller.state(),
            &ClientState::StoryReady {
                story: "Kept.".into()
            }
        );
    }

    #[tokio::test]
    async fn test_new_story_replaces_previous_speech() {
        let backend = Arc::new(
            ScriptedBackend::default()
                .with_story(Ok("First."))
                .with_speech(Ok(vec!["a/output_part_0.mp3"]))
                .with_story(Ok("Second.")),
        );
        let mut controller = ClientController::new(backend);

        controller.submit_story(&StoryRequest::default()).await.unwrap();
        controller.request_speech().await.unwrap();
        controller.submit_story(&StoryRequest::default()).await.unwrap();

        assert_eq!(
            controller.state(),
            &ClientState::StoryReady {
                story: "Second.".into()
            }
        );
        assert!(controller.state().audio_clips().is_empty());
    }
}
