//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 始终返回固定的音频数据，不实际调用 TTS 服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};

/// Fake TTS Client
pub struct FakeTtsClient {
    /// 固定返回的音频，或固定的服务错误
    audio_data: Result<Vec<u8>, String>,
    /// 收到的文本
    requests: Mutex<Vec<String>>,
}

impl FakeTtsClient {
    pub fn new(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data: Ok(audio_data),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 总是返回服务错误
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            audio_data: Err(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            "FakeTtsClient: returning fixed audio"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.text);
        }

        match &self.audio_data {
            Ok(audio_data) => Ok(SpeechResponse {
                audio_data: audio_data.clone(),
                content_type: Some("audio/mpeg".to_string()),
            }),
            Err(message) => Err(TtsError::ServiceError(message.clone())),
        }
    }
}
