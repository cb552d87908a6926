//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod speech_synthesizer;
mod text_generator;

pub use audio_storage::{AudioStorageError, AudioStoragePort, StoredArtifact};
pub use speech_synthesizer::{
    SpeechError, SpeechSynthesizerPort, SynthesisRequest, SynthesisResponse,
};
pub use text_generator::{GenerationConfig, GenerationError, TextGeneratorPort};
