//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TextGenerator、SpeechSynthesizer、AudioStorage）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{GenerateSpeechHandler, GenerateStoryHandler, NO_STORY_PROVIDED},
    GenerateSpeechCommand, GenerateSpeechResponse, GenerateStoryCommand, GenerateStoryResponse,
};

pub use error::ApplicationError;

pub use ports::{
    // Audio storage
    AudioStorageError,
    AudioStoragePort,
    StoredArtifact,
    // Speech synthesizer
    SpeechError,
    SpeechSynthesizerPort,
    SynthesisRequest,
    SynthesisResponse,
    // Text generator
    GenerationConfig,
    GenerationError,
    TextGeneratorPort,
};
