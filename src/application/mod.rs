//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 端口定义（StoryGenerator、TtsEngine、StoryStorage、Progress）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{AudiobookResponse, CreateAudiobookHandler},
    CreateAudiobook,
};

pub use error::ApplicationError;

pub use ports::{
    // Story generator
    CompletionRequest,
    LlmError,
    StoryGeneratorPort,
    // TTS engine
    SpeechRequest,
    SpeechResponse,
    TtsEnginePort,
    TtsError,
    // Storage
    StorageError,
    StoryStoragePort,
    // Progress
    ProgressEvent,
    ProgressPort,
};
