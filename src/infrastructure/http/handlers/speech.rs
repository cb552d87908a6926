//! Speech Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateSpeechCommand;
use crate::infrastructure::http::dto::{QueryPairs, SpeechParams, SpeechResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `GET /speech`
pub async fn generate_speech(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<SpeechResponse>, ApiError> {
    let params = SpeechParams::from(pairs);

    let result = state
        .generate_speech_handler
        .handle(GenerateSpeechCommand {
            story: params.story,
        })
        .await?;

    Ok(Json(SpeechResponse {
        audio_paths: result.audio_paths,
    }))
}
