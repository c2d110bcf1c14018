//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量（`FABLER_` 前缀）
//! 2. 配置文件（fabler.toml）
//! 3. `OPENAI_API_KEY`（仅 llm.api_key）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 对话服务凭证的环境变量
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error("The OpenAI API key is not set. Please set the {} environment variable.", API_KEY_ENV)]
    MissingCredential,
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["fabler", "fabler.local"];

/// 加载应用配置
///
/// # 环境变量示例
/// - `OPENAI_API_KEY=sk-...`
/// - `FABLER_LLM__BASE_URL=http://localhost:11434/v1`
/// - `FABLER_OUTPUT__DIR=/tmp/stories`
/// - `FABLER_LOG__LEVEL=debug`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(config_path, std::env::var(API_KEY_ENV).ok())
}

fn build_config(
    config_path: Option<&Path>,
    fallback_api_key: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("llm.base_url", "https://api.openai.com/v1")?
        .set_default("llm.timeout_secs", 120)?
        .set_default("tts.base_url", "https://api.openai.com/v1")?
        .set_default("tts.timeout_secs", 300)?
        .set_default("output.dir", ".")?
        .set_default("log.level", "warn")?
        .set_default("log.json", false)?;

    if let Some(api_key) = fallback_api_key {
        builder = builder.set_default("llm.api_key", api_key)?;
    }

    // 2. 配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: FABLER_LLM__API_KEY=sk-...
    builder = builder.add_source(
        Environment::with_prefix("FABLER")
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

/// 验证配置有效性（凭证另行检查）
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.llm.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "LLM base URL cannot be empty".to_string(),
        ));
    }

    if config.tts.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "TTS base URL cannot be empty".to_string(),
        ));
    }

    if config.llm.timeout_secs == 0 || config.tts.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "Request timeout cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 取出必需的对话服务凭证
pub fn require_api_key(config: &AppConfig) -> Result<&str, ConfigError> {
    config.llm_api_key().ok_or(ConfigError::MissingCredential)
}

/// 打印配置信息（debug 级别，凭证不输出）
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!("LLM URL: {}", config.llm.base_url);
    tracing::debug!("LLM Timeout: {}s", config.llm.timeout_secs);
    tracing::debug!("LLM Credential: {}", if config.llm_api_key().is_some() { "set" } else { "missing" });
    tracing::debug!("TTS URL: {}", config.tts.base_url);
    tracing::debug!("TTS Timeout: {}s", config.tts.timeout_secs);
    tracing::debug!("Output Directory: {:?}", config.output.dir);
    tracing::debug!("Log Level: {}", config.log.level);
    tracing::debug!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("fabler.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_validation_passes_for_default_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_base_url() {
        let mut config = AppConfig::default();
        config.tts.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_timeout() {
        let mut config = AppConfig::default();
        config.llm.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_missing_credential() {
        let config = AppConfig::default();
        assert!(matches!(
            require_api_key(&config),
            Err(ConfigError::MissingCredential)
        ));
    }

    #[test]
    fn test_fallback_api_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[output]\ndir = \"stories\"\n");

        let config = build_config(Some(&path), Some("sk-env".to_string())).unwrap();
        assert_eq!(require_api_key(&config).unwrap(), "sk-env");
        assert_eq!(config.output.dir, PathBuf::from("stories"));
    }

    #[test]
    fn test_config_file_overrides_fallback_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "[llm]\napi_key = \"sk-file\"\nbase_url = \"http://localhost:8080/v1\"\n\n[log]\nlevel = \"debug\"\n",
        );

        let config = build_config(Some(&path), Some("sk-env".to_string())).unwrap();
        assert_eq!(config.llm_api_key(), Some("sk-file"));
        assert_eq!(config.llm.base_url, "http://localhost:8080/v1");
        assert_eq!(config.tts.base_url, "https://api.openai.com/v1");
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_missing_required_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            build_config(Some(&missing), None),
            Err(ConfigError::LoadError(_))
        ));
    }
}
