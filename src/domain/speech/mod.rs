//! Speech Context - 语音合成限界上下文
//!
//! 职责:
//! - 长文本分块
//! - 音色与编码配置
//! - 音频产物命名

mod chunking;
mod value_objects;

pub use chunking::{split_into_chunks, split_with_limit, TextChunk, MAX_CHUNK_CHARS};
pub use value_objects::{
    artifact_file_name, artifact_name, AudioEncoding, SpeechRequestId, VoiceProfile,
};
