//! Client - 表单客户端
//!
//! 通过 HTTP 调用后端，并维护 `Idle → StoryReady → SpeechReady` 状态机

mod backend;
mod controller;

pub use backend::{ClientError, HttpStoryBackend, StoryBackend};
pub use controller::{ClientController, ClientState};
