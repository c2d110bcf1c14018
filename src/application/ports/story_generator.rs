//! Story Generator Port - 对话补全抽象
//!
//! 定义对话模型调用的抽象接口，具体实现在 infrastructure/adapters/llm

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::story::{build_messages, ChatMessage, CHAT_MODEL, MAX_TOKENS, TEMPERATURE};

/// 对话模型错误
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 对话补全请求
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionRequest {
    /// 按固定模型参数为提示词构造故事请求
    pub fn for_story(prompt: &str) -> Self {
        Self {
            model: CHAT_MODEL.to_string(),
            messages: build_messages(prompt),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Story Generator Port
///
/// 返回模型回复的原始文本（已去除首尾空白），不做 JSON 解析
#[async_trait]
pub trait StoryGeneratorPort: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}
