//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::speech::VoiceProfile;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 文本生成配置
    #[serde(default)]
    pub generation: GenerationConfig,

    /// 语音合成配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 跨域配置
    #[serde(default)]
    pub cors: CorsConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 静态文件服务配置
    #[serde(default)]
    pub static_files: StaticFilesConfig,
}

/// 静态文件服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    /// 是否启用静态文件服务
    #[serde(default = "default_static_enabled")]
    pub enabled: bool,

    /// 静态文件目录
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,

    /// URL 路径前缀（如 "/" 表示根路径托管）
    #[serde(default = "default_static_path")]
    pub path: String,
}

fn default_static_enabled() -> bool {
    false
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_static_path() -> String {
    "/".to_string()
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: default_static_enabled(),
            dir: default_static_dir(),
            path: default_static_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 适配器实现选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// 调用 Google Cloud 托管服务
    #[default]
    Google,
    /// 进程内假实现，本地调试用
    Fake,
}

/// 文本生成配置
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub provider: Provider,

    /// Vertex AI API 根地址；为空时按 location 推导
    #[serde(default)]
    pub endpoint: Option<String>,

    /// GCP 项目 ID
    #[serde(default)]
    pub project_id: String,

    /// 区域
    #[serde(default = "default_location")]
    pub location: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// OAuth 访问令牌（由外部凭据加载器提供）
    #[serde(default)]
    pub access_token: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_location() -> String {
    "us-central1".to_string()
}

fn default_model() -> String {
    "text-bison@001".to_string()
}

fn default_timeout() -> u64 {
    60
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            endpoint: None,
            project_id: String::new(),
            location: default_location(),
            model: default_model(),
            access_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl GenerationConfig {
    /// 获取 API 根地址
    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("https://{}-aiplatform.googleapis.com", self.location))
    }
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    #[serde(default)]
    pub provider: Provider,

    /// Text-to-Speech API 根地址
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,

    /// 语言区域
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// 音色名称
    #[serde(default = "default_voice_name")]
    pub voice_name: String,

    /// OAuth 访问令牌
    #[serde(default)]
    pub access_token: Option<String>,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Fake 实现返回的音频文件；为空时返回静音帧
    #[serde(default)]
    pub fake_audio_file: Option<PathBuf>,
}

fn default_speech_endpoint() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_voice_name() -> String {
    "en-US-Standard-C".to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            endpoint: default_speech_endpoint(),
            language_code: default_language_code(),
            voice_name: default_voice_name(),
            access_token: None,
            timeout_secs: default_timeout(),
            fake_audio_file: None,
        }
    }
}

impl SpeechConfig {
    pub fn voice(&self) -> VoiceProfile {
        VoiceProfile::new(&self.language_code, &self.voice_name)
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频输出目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio_output")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 跨域配置
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// 精确匹配的来源
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// 受信任域名，其本身及所有子域名的 https 来源均放行
    #[serde(default)]
    pub trusted_domain: Option<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost".to_string(),
        "http://localhost:8080".to_string(),
        "http://localhost:3000".to_string(),
    ]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            trusted_domain: None,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
