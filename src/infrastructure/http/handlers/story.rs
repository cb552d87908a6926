//! Story Handlers

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateStoryCommand;
use crate::domain::story::StoryRequest;
use crate::infrastructure::http::dto::{GenerateParams, GenerateResponse, QueryPairs};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// `GET /generate`
pub async fn generate_story(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let params = GenerateParams::from(pairs);

    let cmd = GenerateStoryCommand {
        request: StoryRequest::from_params(
            params.movie_genre,
            params.grade_level,
            params.prompt_length,
        ),
    };

    let result = state.generate_story_handler.handle(cmd).await?;

    Ok(Json(GenerateResponse {
        response: result.text,
    }))
}
