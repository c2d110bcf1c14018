//! Fake Story Client - 用于测试的对话客户端
//!
//! 始终返回固定回复，不实际调用模型服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{CompletionRequest, LlmError, StoryGeneratorPort};

/// Fake Story Client
///
/// 返回配置的固定文本，或固定的服务错误；记录收到的请求
pub struct FakeStoryClient {
    reply: Result<String, String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeStoryClient {
    /// 总是返回 `reply`
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 总是返回网络错误
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StoryGeneratorPort for FakeStoryClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        tracing::debug!(model = %request.model, "FakeStoryClient: returning canned reply");

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        self.reply
            .clone()
            .map(|reply| reply.trim().to_string())
            .map_err(LlmError::NetworkError)
    }
}
