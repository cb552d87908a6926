//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod generation;
pub mod storage;
pub mod tts;

pub use generation::*;
pub use storage::*;
pub use tts::*;
