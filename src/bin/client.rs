//! Story Spark Client - 命令行前端
//!
//! 用法: `story-spark-client [genre] [grade_level] [short|long] [--speech]`

use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches, Parser};

use story_spark::client::{ClientController, HttpStoryBackend};
use story_spark::domain::story::{
    GradeLevel, StoryRequest, DEFAULT_GENRE, DEFAULT_GRADE_LEVEL, DEFAULT_LENGTH_MODE,
};

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(name = "story-spark-client")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a story, and optionally read it aloud")]
struct Args {
    /// Story genre
    #[arg(default_value = DEFAULT_GENRE)]
    genre: String,

    /// Audience grade level
    #[arg(default_value = DEFAULT_GRADE_LEVEL)]
    grade_level: String,

    /// Story length: short or long
    #[arg(default_value = DEFAULT_LENGTH_MODE)]
    prompt_length: String,

    /// Also synthesize speech for the story
    #[arg(long)]
    speech: bool,

    /// Backend base URL
    #[arg(long, env = "STORY_SPARK_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

impl Args {
    fn command_with_levels() -> clap::Command {
        let levels: Vec<String> = GradeLevel::AUDIENCE_LEVELS
            .iter()
            .map(|level| level.as_str().to_string())
            .collect();
        Self::command().after_help(format!(
            "Audience levels: {} (any other grade, e.g. \"7\", is passed through)",
            levels.join(", ")
        ))
    }

    fn parse_with_levels() -> Result<Self, clap::Error> {
        Self::from_arg_matches(&Self::command_with_levels().get_matches())
    }

    fn story_request(&self) -> StoryRequest {
        StoryRequest::from_params(
            Some(self.genre.clone()),
            Some(self.grade_level.clone()),
            Some(self.prompt_length.clone()),
        )
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_with_levels().unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let backend = Arc::new(HttpStoryBackend::new(&args.backend_url, args.timeout_secs)?);
    let mut controller = ClientController::new(backend.clone());

    let request = args.story_request();
    tracing::info!(
        genre = %request.genre,
        grade_level = %request.grade_level,
        length = %request.length_mode,
        backend = %args.backend_url,
        "Requesting story"
    );

    let story = controller.submit_story(&request).await?;
    println!("{}", story);

    if args.speech {
        let clips = controller.request_speech().await?;
        println!();
        for clip in clips {
            println!("{}", backend.audio_url(clip));
        }
    }

    Ok(())
}
