//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, Provider};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `STORY_SPARK_SERVER__PORT=8000`
/// - `STORY_SPARK_GENERATION__PROJECT_ID=my-project`
/// - `STORY_SPARK_GENERATION__ACCESS_TOKEN=ya29...`
/// - `STORY_SPARK_SPEECH__PROVIDER=fake`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8000)?
        .set_default("generation.provider", "google")?
        .set_default("generation.location", "us-central1")?
        .set_default("generation.model", "text-bison@001")?
        .set_default("generation.timeout_secs", 60)?
        .set_default("speech.provider", "google")?
        .set_default("speech.endpoint", "https://texttospeech.googleapis.com")?
        .set_default("speech.language_code", "en-US")?
        .set_default("speech.voice_name", "en-US-Standard-C")?
        .set_default("speech.timeout_secs", 60)?
        .set_default("storage.audio_dir", "audio_output")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 前缀: STORY_SPARK_，层级分隔符: __
    builder = builder.add_source(
        Environment::with_prefix("STORY_SPARK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.generation.provider == Provider::Google {
        if config.generation.model.is_empty() {
            return Err(ConfigError::ValidationError(
                "Generation model cannot be empty".to_string(),
            ));
        }
        if config.generation.endpoint().is_empty() {
            return Err(ConfigError::ValidationError(
                "Generation endpoint cannot be empty".to_string(),
            ));
        }
    }

    if config.speech.provider == Provider::Google && config.speech.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech endpoint cannot be empty".to_string(),
        ));
    }

    if config.speech.language_code.is_empty() || config.speech.voice_name.is_empty() {
        return Err(ConfigError::ValidationError(
            "Speech voice cannot be empty".to_string(),
        ));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出访问令牌
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Generation Provider: {:?}", config.generation.provider);
    tracing::info!("Generation Endpoint: {}", config.generation.endpoint());
    tracing::info!(
        "Generation Model: {} (project={}, location={})",
        config.generation.model,
        config.generation.project_id,
        config.generation.location
    );
    tracing::info!(
        "Generation Token: {}",
        if config.generation.access_token.is_some() { "set" } else { "missing" }
    );
    tracing::info!("Speech Provider: {:?}", config.speech.provider);
    tracing::info!("Speech Endpoint: {}", config.speech.endpoint);
    tracing::info!(
        "Speech Voice: {} / {}",
        config.speech.language_code,
        config.speech.voice_name
    );
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("CORS Origins: {:?}", config.cors.allowed_origins);
    if let Some(domain) = &config.cors.trusted_domain {
        tracing::info!("CORS Trusted Domain: {}", domain);
    }
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
