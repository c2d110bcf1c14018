//! Fabler - 提示词生成故事并朗读为音频
//!
//! 架构设计: Hexagonal Architecture，单条顺序流水线
//!
//! 领域层 (domain/):
//! - Story Context: 故事、提示词、模型回复解析
//! - 输出文件名派生
//!
//! 应用层 (application/):
//! - Ports: StoryGenerator, TtsEngine, StoryStorage, Progress
//! - Commands: CreateAudiobook 及其处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: OpenAI 兼容对话/语音客户端、文件存储
//! - Events: 控制台进度输出

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
