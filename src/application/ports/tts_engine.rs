//! TTS Engine Port - 语音合成抽象
//!
//! 定义 TTS 合成的抽象接口，具体实现在 infrastructure/adapters/tts

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 要合成的完整文本，不分段
    pub text: String,
}

impl SpeechRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// TTS 合成响应
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// 服务返回的音频字节（通常为 MP3）
    pub audio_data: Vec<u8>,
    /// Content-Type（如服务提供）
    pub content_type: Option<String>,
}

/// TTS Engine Port
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 发送文本到 TTS 服务，返回合成的音频数据
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError>;
}
