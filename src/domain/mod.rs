//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Story Context: 故事参数与 prompt 构造
//! - Speech Context: 文本分块与音频产物命名

pub mod speech;
pub mod story;

pub use speech::{split_into_chunks, SpeechRequestId, TextChunk, VoiceProfile, MAX_CHUNK_CHARS};
pub use story::{build_prompt, GradeLevel, LengthMode, StoryRequest};
