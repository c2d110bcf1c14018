//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 对话模型服务配置
    #[serde(default)]
    pub llm: LlmConfig,

    /// TTS 服务配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// 对话服务凭证，空串视为未设置
    pub fn llm_api_key(&self) -> Option<&str> {
        self.llm.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// TTS 凭证，未单独设置时沿用对话服务凭证
    pub fn tts_api_key(&self) -> Option<&str> {
        self.tts
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.llm_api_key())
    }
}

/// 对话模型服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    /// API 凭证
    #[serde(default)]
    pub api_key: Option<String>,

    /// OpenAI 兼容服务基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_llm_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_timeout() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_llm_timeout(),
        }
    }
}

/// TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// API 凭证（可选）
    #[serde(default)]
    pub api_key: Option<String>,

    /// TTS 服务基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒），整篇故事一次合成
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_timeout() -> u64 {
    300
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 文本与音频输出目录
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
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
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
