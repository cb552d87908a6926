//! Story Spark - 儿童故事生成与朗读服务
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Story Context: 表单参数与 prompt 构造
//! - Speech Context: 文本分块与音频产物命名
//!
//! 应用层 (application/):
//! - Ports: TextGenerator, SpeechSynthesizer, AudioStorage
//! - Commands: GenerateStory, GenerateSpeech
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: `/generate`, `/speech`, `/audio`
//! - Adapters: Vertex AI 文本模型、Cloud TTS、文件存储
//!
//! 客户端 (client/):
//! - 后端 HTTP 客户端与表单状态机

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
