//! HTTP Handlers

mod ping;
mod speech;
mod story;

pub use ping::*;
pub use speech::*;
pub use story::*;
