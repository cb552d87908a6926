//! 应用层 - 命令
//!
//! 每个 HTTP 操作对应一条命令及其处理器

mod speech_commands;
mod story_commands;

pub mod handlers;

pub use speech_commands::*;
pub use story_commands::*;
