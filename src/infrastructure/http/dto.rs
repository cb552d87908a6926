//! Data Transfer Objects
//!
//! 线上格式与原有前端保持一致：查询参数输入，扁平 JSON 输出
//!
//! 查询参数以键值对列表接收，同名参数重复出现时取最后一个

use serde::{Deserialize, Serialize};

// ============================================================================
// Generate
// ============================================================================

/// 原始查询参数
pub type QueryPairs = Vec<(String, String)>;

/// `GET /generate` 查询参数，均可缺省
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateParams {
    pub movie_genre: Option<String>,
    pub grade_level: Option<String>,
    pub prompt_length: Option<String>,
}

impl From<QueryPairs> for GenerateParams {
    fn from(pairs: QueryPairs) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "movie_genre" => params.movie_genre = Some(value),
                "grade_level" => params.grade_level = Some(value),
                "prompt_length" => params.prompt_length = Some(value),
                _ => {}
            }
        }
        params
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

// ============================================================================
// Speech
// ============================================================================

/// `GET /speech` 查询参数
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SpeechParams {
    pub story: Option<String>,
}

impl From<QueryPairs> for SpeechParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            story: pairs
                .into_iter()
                .filter(|(key, _)| key == "story")
                .last()
                .map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SpeechResponse {
    pub audio_paths: Vec<String>,
}

// ============================================================================
// Error
// ============================================================================

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
