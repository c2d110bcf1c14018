//! OpenAI Chat Client - 调用 OpenAI 兼容的对话补全服务
//!
//! 实现 StoryGeneratorPort trait
//!
//! 外部 API:
//! POST {base_url}/chat/completions
//! Request: {"model": "...", "messages": [...], "max_tokens": N, "temperature": T}  (JSON)
//! Response: {"choices": [{"message": {"content": "..."}}]}

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{CompletionRequest, LlmError, StoryGeneratorPort};
use crate::domain::story::ChatMessage;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// 对话补全请求体
#[derive(Debug, Serialize)]
struct ChatHttpRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatHttpResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// 对话客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiChatClientConfig {
    /// API 基础 URL（不含 /chat/completions）
    pub base_url: String,
    /// Bearer 凭证
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl OpenAiChatClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 120,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenAI 兼容对话客户端
pub struct OpenAiChatClient {
    client: Client,
    config: OpenAiChatClientConfig,
}

impl OpenAiChatClient {
    pub fn new(config: OpenAiChatClientConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

fn status_error(status: StatusCode, body: String) -> LlmError {
    let message = format!("HTTP {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Unauthorized(message),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
        _ => LlmError::ServiceError(message),
    }
}

#[async_trait]
impl StoryGeneratorPort for OpenAiChatClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let body = ChatHttpRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            url = %self.completions_url(),
            model = %request.model,
            max_tokens = request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else if e.is_connect() {
                    LlmError::NetworkError(format!("Cannot connect to chat service: {}", e))
                } else {
                    LlmError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_error(status, error_text));
        }

        let parsed: ChatHttpResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to decode body: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("response has no message content".into()))?;

        tracing::info!(content_len = content.len(), "Chat completion finished");

        Ok(content.trim().to_string())
    }
}
