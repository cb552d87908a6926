//! Storage Adapter - 音频产物存储实现

mod file_storage;

pub use file_storage::FileAudioStorage;
