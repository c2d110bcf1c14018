//! 应用层错误定义
//!
//! 统一的命令错误类型，任何一种都会终止本次运行

use thiserror::Error;

use crate::application::ports::{LlmError, StorageError, TtsError};
use crate::domain::StoryError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 配置错误（缺少凭证或配置无效）
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 未提供提示词
    #[error("{0}")]
    Usage(String),

    /// 模型回复中没有可解析的 JSON 对象
    #[error("Error parsing JSON response: {0}")]
    MalformedResponse(String),

    /// 外部服务调用失败
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// 文件写入失败
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApplicationError {
    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// 创建用法错误
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

impl From<StoryError> for ApplicationError {
    fn from(err: StoryError) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<LlmError> for ApplicationError {
    fn from(err: LlmError) -> Self {
        Self::UpstreamFailure(format!("chat completion: {}", err))
    }
}

impl From<TtsError> for ApplicationError {
    fn from(err: TtsError) -> Self {
        Self::UpstreamFailure(format!("speech synthesis: {}", err))
    }
}

impl From<StorageError> for ApplicationError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}
