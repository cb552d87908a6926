//! HTTP Routes
//!
//! API Endpoints:
//! - /generate         GET  生成故事（movie_genre, grade_level, prompt_length）
//! - /speech           GET  生成语音（story）
//! - /ping             GET  健康检查
//! - /audio/{id}/{f}   GET  下载已生成的音频片段

use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(audio_dir: &Path) -> Router<Arc<AppState>> {
    Router::new()
        .route("/generate", get(handlers::generate_story))
        .route("/speech", get(handlers::generate_speech))
        .route("/ping", get(handlers::ping))
        .nest_service("/audio", ServeDir::new(audio_dir))
}
