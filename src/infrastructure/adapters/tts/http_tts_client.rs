//! HTTP TTS Client - 调用 OpenAI 兼容的语音合成服务
//!
//! 实现 TtsEnginePort trait
//!
//! 外部 TTS API:
//! POST {base_url}/audio/speech
//! Request: {"model": "tts-1", "input": "...", "voice": "alloy", "response_format": "mp3"}  (JSON)
//! Response: audio/mpeg binary

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};

pub const DEFAULT_TTS_BASE_URL: &str = "https://api.openai.com/v1";

/// 合成模型
pub const SPEECH_MODEL: &str = "tts-1";

/// 音色
pub const SPEECH_VOICE: &str = "alloy";

/// 输出格式，与 .mp3 扩展名一致
pub const SPEECH_FORMAT: &str = "mp3";

/// TTS 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct TtsHttpRequest<'a> {
    model: &'a str,
    /// 要合成的文本
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// TTS 服务基础 URL（不含 /audio/speech）
    pub base_url: String,
    /// Bearer 凭证
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl HttpTtsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_TTS_BASE_URL.to_string(),
            api_key: api_key.into(),
            timeout_secs: 300,
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

/// HTTP TTS 客户端
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取合成 URL
    fn speech_url(&self) -> String {
        format!("{}/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsClient {
    async fn synthesize(&self, request: SpeechRequest) -> Result<SpeechResponse, TtsError> {
        let http_request = TtsHttpRequest {
            model: SPEECH_MODEL,
            input: &request.text,
            voice: SPEECH_VOICE,
            response_format: SPEECH_FORMAT,
        };

        tracing::debug!(
            url = %self.speech_url(),
            text_len = request.text.len(),
            voice = SPEECH_VOICE,
            "Sending TTS request"
        );

        let response = self
            .client
            .post(self.speech_url())
            .bearer_auth(&self.config.api_key)
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // 直接获取音频字节
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            content_type = ?content_type,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SpeechResponse {
            audio_data,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> HttpTtsClient {
        HttpTtsClient::new(HttpTtsClientConfig::new("tts-key").with_base_url(server.url())).unwrap()
    }

    #[test]
    fn test_config_builder() {
        let config = HttpTtsClientConfig::new("k")
            .with_base_url("http://example.com:9000/v1/")
            .with_timeout(60);
        assert_eq!(config.base_url, "http://example.com:9000/v1/");
        assert_eq!(config.timeout_secs, 60);

        let client = HttpTtsClient::new(config).unwrap();
        assert_eq!(client.speech_url(), "http://example.com:9000/v1/audio/speech");
    }

    #[tokio::test]
    async fn test_synthesize_returns_audio_bytes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/audio/speech")
            .match_header("authorization", "Bearer tts-key")
            .match_body(Matcher::Json(json!({
                "model": "tts-1",
                "input": "Once upon a time...",
                "voice": "alloy",
                "response_format": "mp3"
            })))
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(b"ID3\x04\x00audio")
            .create_async()
            .await;

        let response = client_for(&server)
            .synthesize(SpeechRequest::new("Once upon a time..."))
            .await
            .unwrap();

        assert_eq!(response.audio_data, b"ID3\x04\x00audio");
        assert_eq!(response.content_type.as_deref(), Some("audio/mpeg"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/audio/speech")
            .with_status(400)
            .with_body("input too long")
            .create_async()
            .await;

        let err = client_for(&server)
            .synthesize(SpeechRequest::new("x"))
            .await
            .unwrap_err();

        match err {
            TtsError::ServiceError(message) => {
                assert!(message.contains("400"));
                assert!(message.contains("input too long"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
