//! Story Spark - 故事生成服务
//!
//! 启动顺序：配置 → 日志 → 适配器 → HTTP 服务器

use std::sync::Arc;

use story_spark::application::{SpeechSynthesizerPort, TextGeneratorPort};
use story_spark::config::{load_config, print_config, AppConfig, Provider};
use story_spark::infrastructure::adapters::{
    FakeTextGenerator, FakeTtsClient, FileAudioStorage, GoogleTtsClient, GoogleTtsClientConfig,
    VertexTextClient, VertexTextClientConfig,
};
use story_spark::infrastructure::http::{AppState, HttpServer, ServerConfig};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},story_spark={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn build_text_generator(config: &AppConfig) -> anyhow::Result<Arc<dyn TextGeneratorPort>> {
    let generation = &config.generation;
    Ok(match generation.provider {
        Provider::Fake => Arc::new(FakeTextGenerator::new()),
        Provider::Google => {
            if generation.access_token.is_none() {
                tracing::warn!("No generation access token configured; requests will be unauthenticated");
            }
            Arc::new(VertexTextClient::new(VertexTextClientConfig {
                endpoint: generation.endpoint(),
                project_id: generation.project_id.clone(),
                location: generation.location.clone(),
                model: generation.model.clone(),
                access_token: generation.access_token.clone(),
                timeout_secs: generation.timeout_secs,
            })?)
        }
    })
}

fn build_speech_synthesizer(config: &AppConfig) -> anyhow::Result<Arc<dyn SpeechSynthesizerPort>> {
    let speech = &config.speech;
    Ok(match speech.provider {
        Provider::Fake => match &speech.fake_audio_file {
            Some(path) => Arc::new(FakeTtsClient::from_file(path)?),
            None => Arc::new(FakeTtsClient::new()),
        },
        Provider::Google => {
            if speech.access_token.is_none() {
                tracing::warn!("No speech access token configured; requests will be unauthenticated");
            }
            Arc::new(GoogleTtsClient::new(GoogleTtsClientConfig {
                endpoint: speech.endpoint.clone(),
                access_token: speech.access_token.clone(),
                timeout_secs: speech.timeout_secs,
            })?)
        }
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Story Spark - story generation service");
    print_config(&config);

    // 适配器只在启动时构建一次，之后以只读方式共享
    let text_generator = build_text_generator(&config)?;
    let speech_synthesizer = build_speech_synthesizer(&config)?;
    let audio_storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);

    let state = AppState::new(
        text_generator,
        speech_synthesizer,
        audio_storage,
        config.speech.voice(),
        config.storage.audio_dir.clone(),
    );

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_cors(config.cors.clone());
    let static_files = &config.server.static_files;
    if static_files.enabled {
        server_config = server_config.with_static_files(&static_files.dir, &static_files.path);
    }

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
