//! Command Handlers 实现

mod speech_handlers;
mod story_handlers;

pub use speech_handlers::*;
pub use story_handlers::*;
