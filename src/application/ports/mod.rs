//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod progress;
mod story_generator;
mod story_storage;
mod tts_engine;

pub use progress::{ProgressEvent, ProgressPort};
pub use story_generator::{CompletionRequest, LlmError, StoryGeneratorPort};
pub use story_storage::{StorageError, StoryStoragePort};
pub use tts_engine::{SpeechRequest, SpeechResponse, TtsEnginePort, TtsError};
