//! 健康检查
//!
//! 音频目录不可用时返回 `degraded`，此时 `/speech` 必然失败

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::infrastructure::http::state::AppState;

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub audio_dir_ready: bool,
}

pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let audio_dir_ready = tokio::fs::metadata(&state.audio_dir)
        .await
        .map(|meta| meta.is_dir())
        .unwrap_or(false);

    if !audio_dir_ready {
        tracing::warn!(audio_dir = %state.audio_dir.display(), "Audio directory is not available");
    }

    Json(PingResponse {
        status: if audio_dir_ready { "ok" } else { "degraded" },
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        audio_dir_ready,
    })
}
